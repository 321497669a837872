use axum::{debug_handler, extract::State, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::{session, views::{Templates, View}, AppResult, AppState, RoomStore, HX_PUSH_URL};

use super::Room;

#[debug_handler(state = AppState)]
pub(crate) async fn create(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,
) -> AppResult<Response> {
    let room = Room::new();
    rooms.store(room.id.clone(), room.clone());
    info!(room_id = %room.id, "room created");

    let jar = session::with_room(jar, &room.id);
    let jar = session::with_owner_secret(jar, &room.owner_secret);
    let push_url = format!("/room/{}", room.id);

    Ok((
        jar,
        [(HX_PUSH_URL, push_url)],
        templates.render(&View::Owner(&room))?,
    ).into_response())
}
