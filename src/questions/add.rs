use axum::{debug_handler, extract::{rejection::FormRejection, State}, response::Html, Form};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::debug;

use crate::{rooms::current_room, views::{Templates, View}, AppError, AppResult, AppState, RoomStore};

use super::Question;

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionForm {
    #[serde(default)]
    to: String,
    #[serde(default)]
    body: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn prompt(State(templates): State<Templates>) -> AppResult<Html<String>> {
    templates.render(&View::Prompt)
}

#[debug_handler(state = AppState)]
pub(crate) async fn add_question(
    State(rooms): State<RoomStore>,
    State(templates): State<Templates>,
    jar: CookieJar,

    form: Result<Form<QuestionForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let prompt = templates.render(&View::Prompt)?;

    let QuestionForm { to, body } = match form {
        Ok(Form(form)) => form,
        // not a form submission, the prompt is all there is to answer
        Err(FormRejection::InvalidFormContentType(_)) => return Ok(prompt),
        Err(rejection) => return Err(AppError::bad_request(rejection.body_text())),
    };

    let mut room = current_room(rooms.as_ref(), &jar)?;
    room.questions.push(Question::new(to, body));
    debug!(room_id = %room.id, count = room.questions.len(), "question added");

    // Not atomic with the load above: a concurrent submission to the same
    // room may be overwritten.
    rooms.store(room.id.clone(), room);

    Ok(prompt)
}
