use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;
use tracing::{debug, info};

use crate::{session, views::{Templates, View}, AppResult, AppState, RoomStore, HX_PUSH_URL};

/// Closes the room named by the room cookie, for everyone.
///
/// Whoever holds the public room cookie may do this, the owner secret is not
/// checked.
#[debug_handler(state = AppState)]
pub(crate) async fn leave(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,
) -> AppResult<Response> {
    match session::room_id(&jar) {
        Some(room_id) => {
            rooms.delete(&room_id);
            info!(room_id = %room_id, "room deleted");
        }
        None => debug!("leave without a room cookie"),
    }

    Ok((
        [(HX_PUSH_URL, "/")],
        templates.render(&View::Home)?,
    ).into_response())
}
