// src/handlers/scores.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        ranking::{RankedUser, RankingEntry, RankingsQuery},
        user::ScoreResponse,
    },
};

/// Returns a user's current cumulative score.
pub async fn get_score(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidRequest("User id is required".to_string()));
    }

    let user: ScoreResponse =
        sqlx::query_as("SELECT id, username, score FROM users WHERE id = ?")
            .bind(&user_id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::UserNotFound)?;

    Ok(Json(user))
}

/// Returns the leaderboard of users who finished the quiz.
///
/// Ordering is score descending with `created_at` ascending as the
/// deterministic tie-break: at equal score, the earlier registrant ranks
/// higher. Ranks are global and 1-based, so page 2 continues where page 1
/// left off instead of restarting at 1.
pub async fn list_rankings(
    State(pool): State<SqlitePool>,
    Query(params): Query<RankingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    if params.limit < 1 || params.limit > 1000 {
        return Err(AppError::InvalidRequest(
            "limit must be between 1 and 1000".to_string(),
        ));
    }
    if params.offset < 0 {
        return Err(AppError::InvalidRequest(
            "offset must not be negative".to_string(),
        ));
    }

    let users: Vec<RankedUser> = sqlx::query_as(
        "SELECT username, score, created_at
         FROM users
         WHERE completed_at IS NOT NULL
         ORDER BY score DESC, created_at ASC
         LIMIT ? OFFSET ?",
    )
    .bind(params.limit)
    .bind(params.offset)
    .fetch_all(&pool)
    .await?;

    let rankings: Vec<RankingEntry> = users
        .into_iter()
        .enumerate()
        .map(|(i, user)| RankingEntry {
            rank: params.offset + i as i64 + 1,
            username: user.username,
            score: user.score,
            timestamp: user.created_at,
        })
        .collect();

    Ok(Json(json!({ "rankings": rankings })))
}
