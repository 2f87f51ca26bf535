pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route(
            "/api/v1/match/candidates",
            post(handlers::handle_candidates_for_job),
        )
        .route(
            "/api/v1/match/jobs",
            post(handlers::handle_jobs_for_candidate),
        )
        .with_state(state)
}
