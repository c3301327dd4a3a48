//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into JSON responses of the form
//! `{"status": "error", "message": "..."}` with a matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use welf_core::CoreError;
use welf_service::ServiceError;

/// Message sent for internal failures unless a handler names a better one.
const GENERIC_INTERNAL_MESSAGE: &str = "internal server error";

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and sends only `message`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 500 Internal Server Error: details logged, not exposed.
    Internal { message: &'static str, source: anyhow::Error },
}

impl ApiError {
    /// Replaces the client-facing message of an internal error.
    #[must_use]
    pub fn internal_message(self, message: &'static str) -> Self {
        match self {
            Self::Internal { source, .. } => Self::Internal { message, source },
            other @ Self::BadRequest(_) => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) => msg,
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, "internal server error");
                message.to_owned()
            },
        };
        let body = serde_json::json!({"status": "error", "message": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal { message: GENERIC_INTERNAL_MESSAGE, source: err }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Storage(_) => Self::from(anyhow::Error::new(err)),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::from(ServiceError::from(err))
    }
}
