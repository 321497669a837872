pub mod appresult;
pub mod config;
pub mod index;
pub mod questions;
pub mod res;
pub mod rooms;
pub mod session;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::{extract::FromRef, http::HeaderName, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use appresult::{AppError, AppResult};
use config::Config;
use rooms::Room;
use store::{MemoryStore, Store};
use views::Templates;

/// Tells htmx which URL to show in the address bar after a swap.
pub const HX_PUSH_URL: HeaderName = HeaderName::from_static("hx-push-url");

pub type RoomStore = Arc<dyn Store<String, Room>>;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub rooms: RoomStore,
    pub templates: Templates,
}

impl AppState {
    /// Empty in-memory room store and freshly compiled templates.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            rooms: Arc::new(MemoryStore::<String, Room>::new()),
            templates: Templates::new()?,
        })
    }
}

pub fn app(app_state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(index::index))

        .merge(rooms::router())
        .merge(questions::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(index::index)

        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
