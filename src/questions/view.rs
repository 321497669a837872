use axum::{debug_handler, extract::{Query, State}, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{rooms::current_room, views::{Templates, View}, AppResult, AppState, RoomStore};

use super::{Paging, Step};

#[derive(Debug, Deserialize)]
pub(crate) struct ViewQuery {
    n: Option<String>,
    a: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn view(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,
    Query(ViewQuery { n, a }): Query<ViewQuery>,
) -> AppResult<Response> {
    // answered with 200 on purpose, the pager just shows the text
    let Some(n) = n.and_then(|n| n.parse::<i64>().ok()) else {
        return Ok("no index was supplied".into_response());
    };

    let room = current_room(rooms.as_ref(), &jar)?;
    let paging = Paging::at(&room.questions, n, a.as_deref().and_then(Step::parse));

    Ok(templates.render(&View::Paging(paging))?.into_response())
}
