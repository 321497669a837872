use axum::{debug_handler, extract::State, response::Html};

use crate::{views::{Templates, View}, AppResult, AppState};

#[debug_handler(state = AppState)]
pub async fn index(State(templates): State<Templates>) -> AppResult<Html<String>> {
    templates.render_page(&View::Home)
}
