mod join;
mod leave;
mod new;
mod open;
mod room;

use axum::{routing::{get, post}, Router};
use axum_extra::extract::CookieJar;
use rand::Rng;
use serde::Serialize;

use crate::{questions::Question, session, store::Store, AppError, AppResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(new::create))
        .route("/join", post(join::join))
        .route("/leave", get(leave::leave).post(leave::leave))
        .route("/checkopen", get(open::check_open))
        .route("/room/{room_id}", get(room::room))
}

/// One Q&A session.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    /// Six digits. Public: it is the join code and the path of the room page.
    pub id: String,
    #[serde(skip)]
    pub owner_secret: String,
    /// In submission order.
    pub questions: Vec<Question>,
}

impl Room {
    /// A fresh room with random id and secret. Ids are not checked against
    /// rooms that already exist.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let id = (0..6)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        let owner_secret = rng.random_range(0..i64::MAX).to_string();

        Self {
            id,
            owner_secret,
            questions: Vec::new(),
        }
    }

    pub fn is_owned_by(&self, secret: Option<&str>) -> bool {
        secret == Some(self.owner_secret.as_str())
    }
}

/// The room named by the caller's room cookie.
pub(crate) fn current_room(rooms: &dyn Store<String, Room>, jar: &CookieJar) -> AppResult<Room> {
    let Some(room_id) = session::room_id(jar) else {
        return Err(AppError::bad_request("there was no room cookie set"));
    };

    rooms
        .load(&room_id)
        .ok_or_else(|| AppError::bad_request(format!("room {room_id} was not found")))
}
