//! HTTP error type and response mapping.
//!
//! Store internals (driver messages, query text) never reach callers;
//! unexpected failures collapse to a generic database-error body and the
//! detail goes to the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error body shared by all failure responses: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Service-level errors mapped to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing required input; never reaches the store.
    #[error("{0}")]
    BadRequest(String),

    /// Normal, expected outcome of Get/Delete on an absent id. Not
    /// logged as an error.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store failure at request time.
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

impl AppError {
    /// The not-found response shared by Get and Delete.
    pub(crate) fn photo_not_found() -> Self {
        Self::NotFound("Photo not found".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Database(error) => {
                tracing::error!(error = ?error, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
