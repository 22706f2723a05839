use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::services::RecipeError;

/// Errors surfaced by the page handlers.
///
/// Bodies are plain human-readable text. `OperationFailed` is deliberately sent
/// with `200 OK`: a failed write shows the visitor a message, not an error page.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    OperationFailed(String),

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::OperationFailed(msg) => write!(f, "Operation failed: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::OperationFailed(msg) => (StatusCode::OK, msg),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound(id) => ApiError::recipe_not_found(id),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn recipe_not_found(id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("Recipe {} not found", id))
    }

    /// Maps a failed write to the visitor-facing `message`, keeping 404s intact.
    pub fn write_failed(err: RecipeError, message: &str) -> Self {
        match err {
            RecipeError::NotFound(id) => ApiError::recipe_not_found(id),
            other => {
                tracing::error!("Recipe write failed: {}", other);
                ApiError::OperationFailed(message.to_string())
            }
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }
}
