// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'answers' table in the database.
/// One immutable record per (user, question) pair, enforced by the
/// `idx_user_question` unique index.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub user_id: String,
    pub question_id: String,

    /// Local option id the user picked ("a"/"b"/"c").
    pub selected_answer_id: String,

    pub is_correct: bool,
    pub score_earned: i64,
    pub answered_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting an answer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub user_id: String,
    pub question_id: String,
    pub answer_id: String,
}

/// Result of a scored submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub score_earned: i64,

    /// The user's cumulative score after this submission.
    pub total_score: i64,
}
