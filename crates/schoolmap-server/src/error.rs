//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce JSON error bodies
//! with appropriate HTTP status codes: validation failures are client
//! errors (`{"error": ...}`), storage failures are server errors carrying
//! the underlying store's error text verbatim (`{"error", "details"}`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use schoolmap_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A registration field is missing, empty, or of the wrong type (400).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A query coordinate is missing or not a signed decimal (400).
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// A query coordinate is numeric but geographically invalid (400).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The underlying store failed (500).
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidInput(msg)
            | ApiError::InvalidLocation(msg)
            | ApiError::OutOfRange(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::StorageFailure(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "Database error",
                    "details": details,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::StorageFailure(err.to_string())
    }
}
