// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{questions, scores, users},
    state::AppState,
};

/// Liveness probe for deployment checks.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Cave Exploration API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (users, questions, scores/rankings).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/register", post(users::register))
        .route("/check/{username}", get(users::check_username))
        .route("/{user_id}/complete", post(users::mark_complete));

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route("/answer", post(questions::submit_answer));

    let ranking_routes = Router::new().route("/", get(scores::list_rankings));

    let score_routes = Router::new().route("/{user_id}", get(scores::get_score));

    Router::new()
        .route("/health", get(health))
        .nest("/api/users", user_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/rankings", ranking_routes)
        .nest("/api/scores", score_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
