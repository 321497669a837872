use axum::{debug_handler, extract::State, response::{IntoResponse, Response}, Form};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::info;

use crate::{session, views::{Templates, View}, AppError, AppResult, AppState, RoomStore};

#[derive(Debug, Deserialize)]
pub(crate) struct JoinForm {
    #[serde(default, alias = "sessionid")]
    roomid: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn join(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,

    Form(JoinForm { roomid }): Form<JoinForm>,
) -> AppResult<Response> {
    if rooms.load(&roomid).is_none() {
        return Err(AppError::bad_request(format!("room {roomid} was not found")));
    }
    info!(room_id = %roomid, "participant joined");

    Ok((
        session::with_room(jar, &roomid),
        templates.render(&View::Prompt)?,
    ).into_response())
}
