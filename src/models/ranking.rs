// src/models/ranking.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the leaderboard joined from `users`, before rank assignment.
#[derive(Debug, FromRow)]
pub struct RankedUser {
    pub username: String,
    pub score: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One leaderboard entry as returned to the client.
/// `rank` is global and 1-based: offset + position in page + 1.
#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub rank: i64,
    pub username: String,
    pub score: i64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for the rankings endpoint.
/// Out-of-range values are rejected, never clamped.
#[derive(Debug, Deserialize)]
pub struct RankingsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}
