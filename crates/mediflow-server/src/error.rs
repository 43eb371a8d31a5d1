//! Application error types and axum response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
///
/// Upstream platform failures never appear here: the gateway converts them
/// into in-band fallback results before a handler sees them.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            AppError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Validates that a required request field is present and non-blank. Runs
/// before any outbound call is attempted.
pub fn require<'a>(value: &'a str, name: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    match trimmed.is_empty() {
        true => Err(AppError::BadRequest(format!("{name} is required"))),
        false => Ok(trimmed),
    }
}
