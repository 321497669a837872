use axum::{debug_handler, extract::State, response::Html};
use axum_extra::extract::CookieJar;

use crate::{rooms::current_room, views::{Templates, View}, AppResult, AppState, RoomStore};

#[debug_handler(state = AppState)]
pub(crate) async fn count(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,
) -> AppResult<Html<String>> {
    let room = current_room(rooms.as_ref(), &jar)?;
    templates.render(&View::Count(room.questions.len()))
}
