//! Error types for the fleet API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use skyfleet_core::CommandError;

/// Errors that can occur in the fleet API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The addressed drone does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request carried an unexecutable task definition.
    #[error("{0}")]
    InvalidTask(String),

    /// The drone cannot accept the command right now.
    #[error("{0}")]
    Conflict(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound(_) => Self::NotFound(err.to_string()),
            CommandError::InvalidTask { .. } => Self::InvalidTask(err.to_string()),
            CommandError::StateConflict { .. } => Self::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidTask(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
