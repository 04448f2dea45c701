// src/handlers/questions.rs

use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        answer::{SubmitAnswerRequest, SubmitAnswerResponse},
        question::{PublicOption, PublicQuestion, Question, QuestionOption},
    },
};

/// Returns the full question bank with options, grouped by difficulty tier.
///
/// Serialized through `PublicQuestion`, which strips the answer key and
/// explanation so the client never sees them before answering.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions: Vec<Question> = sqlx::query_as(
        "SELECT id, text, difficulty, correct_answer_id, explanation, created_at
         FROM questions
         ORDER BY difficulty, created_at",
    )
    .fetch_all(&pool)
    .await?;

    let options: Vec<QuestionOption> = sqlx::query_as(
        "SELECT id, question_id, option_id, text FROM options ORDER BY question_id, option_id",
    )
    .fetch_all(&pool)
    .await?;

    let mut options_by_question: HashMap<String, Vec<PublicOption>> = HashMap::new();
    for opt in options {
        options_by_question
            .entry(opt.question_id)
            .or_default()
            .push(PublicOption {
                id: opt.option_id,
                text: opt.text,
            });
    }

    let questions: Vec<PublicQuestion> = questions
        .into_iter()
        .map(|q| PublicQuestion {
            options: options_by_question.remove(&q.id).unwrap_or_default(),
            id: q.id,
            text: q.text,
            difficulty: q.difficulty,
        })
        .collect();

    Ok(Json(json!({ "questions": questions })))
}

/// Submits a user's answer to one question and awards points.
///
/// Validation order: inputs present, user exists, question exists, not yet
/// answered. A correct answer earns 10 points on a basic question and 20 on
/// an advanced one; wrong answers earn 0 and never subtract.
///
/// The answer row is inserted before the score update, inside one
/// transaction: a racing duplicate then fails on the `idx_user_question`
/// unique index before any score mutation, and the whole call rolls back.
/// The pre-insert existence check only gives the common case a clean error.
pub async fn submit_answer(
    State(pool): State<SqlitePool>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.user_id.trim().is_empty()
        || req.question_id.trim().is_empty()
        || req.answer_id.trim().is_empty()
    {
        return Err(AppError::InvalidRequest(
            "userId, questionId and answerId are required".to_string(),
        ));
    }

    let user: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
        .bind(&req.user_id)
        .fetch_optional(&pool)
        .await?;
    if user.is_none() {
        return Err(AppError::UserNotFound);
    }

    let question: Question = sqlx::query_as(
        "SELECT id, text, difficulty, correct_answer_id, explanation, created_at
         FROM questions WHERE id = ?",
    )
    .bind(&req.question_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::QuestionNotFound)?;

    let already_answered: Option<String> =
        sqlx::query_scalar("SELECT id FROM answers WHERE user_id = ? AND question_id = ?")
            .bind(&req.user_id)
            .bind(&req.question_id)
            .fetch_optional(&pool)
            .await?;
    if already_answered.is_some() {
        return Err(AppError::DuplicateSubmission);
    }

    let correct = req.answer_id == question.correct_answer_id;
    let score_earned = if correct { question.award() } else { 0 };

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO answers (id, user_id, question_id, selected_answer_id, is_correct, score_earned, answered_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&req.user_id)
    .bind(&req.question_id)
    .bind(&req.answer_id)
    .bind(correct)
    .bind(score_earned)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            AppError::DuplicateSubmission
        } else {
            tracing::error!("Failed to record answer: {:?}", e);
            AppError::from(e)
        }
    })?;

    if score_earned > 0 {
        // Relative update: concurrent correct answers on distinct questions
        // accumulate without lost updates.
        sqlx::query("UPDATE users SET score = score + ? WHERE id = ?")
            .bind(score_earned)
            .bind(&req.user_id)
            .execute(&mut *tx)
            .await?;
    }

    let total_score: i64 = sqlx::query_scalar("SELECT score FROM users WHERE id = ?")
        .bind(&req.user_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Json(SubmitAnswerResponse {
        correct,
        score_earned,
        total_score,
    }))
}
