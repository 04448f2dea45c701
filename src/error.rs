// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request: missing/malformed input, out-of-range pagination
    InvalidRequest(String),

    // 404 Not Found
    UserNotFound,
    QuestionNotFound,

    // 409 Conflict: registration against an existing username
    DuplicateUsername(String),

    // 409 Conflict: this (user, question) pair was already answered;
    // the original answer and score stand
    DuplicateSubmission,

    // 500 Internal Server Error: underlying persistence failure
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            AppError::QuestionNotFound => {
                (StatusCode::NOT_FOUND, "Question not found".to_string())
            }
            AppError::DuplicateUsername(username) => (
                StatusCode::CONFLICT,
                format!("Username '{}' already exists", username),
            ),
            AppError::DuplicateSubmission => (
                StatusCode::CONFLICT,
                "Question already answered; the recorded result stands".to_string(),
            ),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::Storage`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
