// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    /// Display name, stored trimmed. Unique.
    pub username: String,

    /// Cumulative score. Mutated only by the answer-submission handler,
    /// always through a relative `score = score + ?` update.
    pub score: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Set exactly once when the user finishes all questions.
    /// Only completed users appear in the rankings.
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating a new user (Registration).
///
/// The handler trims the username before validation; the length bounds
/// therefore apply to the trimmed value.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters."))]
    pub username: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: String,
}

/// Response for the username availability check.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// DTO for a user's current score.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[sqlx(rename = "id")]
    pub user_id: String,
    pub username: String,
    pub score: i64,
}
