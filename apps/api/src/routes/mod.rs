pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisory::handlers as advice;
use crate::analysis::handlers as resumes;
use crate::state::AppState;

/// Uploads above this size are rejected before extraction runs.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/api/v1/resumes", post(resumes::handle_upload))
        .route("/api/v1/resumes/:id", get(resumes::handle_get_resume))
        // Advisory triggers
        .route(
            "/api/v1/resumes/:id/advice/career",
            post(advice::handle_career_explanation),
        )
        .route(
            "/api/v1/resumes/:id/advice/improvements",
            post(advice::handle_improvement_suggestions),
        )
        .route(
            "/api/v1/resumes/:id/advice/interview",
            post(advice::handle_interview_questions),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
