// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{AvailabilityResponse, RegisterRequest, RegisterResponse},
};

/// Registers a new user with a display name.
///
/// The username is trimmed before validation and storage, so uniqueness is
/// always compared over the trimmed form. Returns 201 Created with the new
/// user id; the user starts at score 0 with no completion timestamp.
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = RegisterRequest {
        username: payload.username.trim().to_string(),
    };
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::InvalidRequest(validation_errors.to_string()));
    }

    let user_id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO users (id, username, score, created_at) VALUES (?, ?, 0, ?)")
        .bind(&user_id)
        .bind(&payload.username)
        .bind(Utc::now())
        .execute(&pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::DuplicateUsername(payload.username.clone())
            } else {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::from(e)
            }
        })?;

    tracing::info!("Registered user '{}' ({})", payload.username, user_id);

    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}

/// Checks whether a display name is still available.
/// Compares against the trimmed form, matching what registration stores.
pub async fn check_username(
    State(pool): State<SqlitePool>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest("Username is required".to_string()));
    }

    let existing: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(trimmed)
        .fetch_optional(&pool)
        .await?;

    Ok(Json(AvailabilityResponse {
        available: existing.is_none(),
    }))
}

/// Marks a user as having finished the quiz.
///
/// `completed_at` is set at most once: the guarded UPDATE only fires while the
/// column is still NULL, so repeat calls are no-op successes and the original
/// completion time stands. Only completed users appear in the rankings.
pub async fn mark_complete(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidRequest("User id is required".to_string()));
    }

    let result = sqlx::query("UPDATE users SET completed_at = ? WHERE id = ? AND completed_at IS NULL")
        .bind(Utc::now())
        .bind(&user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        // Either the user does not exist or they already completed.
        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
            .bind(&user_id)
            .fetch_optional(&pool)
            .await?;

        if exists.is_none() {
            return Err(AppError::UserNotFound);
        }
    }

    Ok(Json(json!({ "success": true })))
}
