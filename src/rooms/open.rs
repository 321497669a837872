use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;

use crate::{session, views::{Templates, View}, AppResult, AppState, RoomStore};

/// Polled by participants. Empty while the room exists.
#[debug_handler(state = AppState)]
pub(crate) async fn check_open(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,
) -> AppResult<Response> {
    // no cookie and no room look the same to the participant
    let open = session::room_id(&jar).is_some_and(|room_id| rooms.load(&room_id).is_some());
    if open {
        return Ok(().into_response());
    }

    Ok(templates.render(&View::RoomClosed)?.into_response())
}
