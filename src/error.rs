use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Everything a request can fail with. Each variant maps to exactly one
/// HTTP status; no error here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("invalid boolean value: {0:?}")]
    InvalidBool(String),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("Integrity Error")]
    Integrity,
    #[error("todo not found")]
    NotFound,
    #[error("Method is not used correctly: Item wasn't saved to be deleted!")]
    MethodNotAllowed,
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::InvalidBool(_)
            | Error::InvalidBody(_)
            | Error::Integrity => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Db(err) = &self {
            tracing::error!(error = %err, "database failure");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
