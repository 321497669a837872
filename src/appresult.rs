use axum::{http::StatusCode, response::{IntoResponse, Response}};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Missing cookie, unknown room and similar client mistakes.
    BadRequest(String),
    NotFound(String),
    /// Anything that went wrong on our side, template rendering mostly.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::debug!("bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::debug!("not found: {msg}");
                (StatusCode::NOT_FOUND, msg).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!("{err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("error {err} occurred\n\n{}", err.backtrace()),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
