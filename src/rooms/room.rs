use axum::{debug_handler, extract::{Path, State}, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;

use crate::{session, views::{Templates, View}, AppError, AppResult, AppState, RoomStore};

#[debug_handler(state = AppState)]
pub(crate) async fn room(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    Path(room_id): Path<String>,
    jar: CookieJar,
) -> AppResult<Response> {
    let Some(room) = rooms.load(&room_id) else {
        return Err(AppError::not_found(format!("room {room_id} was not found")));
    };

    let view = if room.is_owned_by(session::owner_secret(&jar).as_deref()) {
        View::Owner(&room)
    } else {
        View::Prompt
    };
    let page = templates.render_page(&view)?;

    Ok((session::with_room(jar, &room.id), page).into_response())
}
