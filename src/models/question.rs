// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
/// Questions are seeded at startup and immutable afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    /// The text content of the question.
    pub text: String,

    /// Difficulty tier: 'basic' (10 points) or 'advanced' (20 points).
    pub difficulty: String,

    /// Local id of the correct option ("a"/"b"/"c").
    pub correct_answer_id: String,

    /// Explanation of the correct answer, shown after answering.
    pub explanation: Option<String>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Question {
    /// Points awarded for a correct answer at this difficulty.
    pub fn award(&self) -> i64 {
        if self.difficulty == "basic" { 10 } else { 20 }
    }
}

/// Represents the 'options' table: one selectable choice owned by a question.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub question_id: String,

    /// Local id within the owning question ("a"/"b"/"c").
    pub option_id: String,

    pub text: String,
}

/// DTO for sending a question to the client.
/// Excludes `correct_answer_id` and `explanation` so the answer key never
/// leaves the server before the user has answered.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    pub text: String,
    pub difficulty: String,
    pub options: Vec<PublicOption>,
}

/// One option as the client sees it: local id plus text.
#[derive(Debug, Serialize)]
pub struct PublicOption {
    pub id: String,
    pub text: String,
}
