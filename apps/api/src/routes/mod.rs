pub mod assessments;
pub mod candidates;
pub mod health;
pub mod jobs;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/jobs", get(jobs::list).post(jobs::create))
        .route("/api/jobs/slug/:slug", get(jobs::get_by_slug))
        .route(
            "/api/jobs/:id",
            get(jobs::get).patch(jobs::patch).delete(jobs::delete),
        )
        .route("/api/jobs/:id/reorder", patch(jobs::reorder))
        // Candidates
        .route(
            "/api/candidates",
            get(candidates::list).post(candidates::create),
        )
        .route(
            "/api/candidates/:id",
            get(candidates::get).patch(candidates::patch),
        )
        .route("/api/candidates/:id/timeline", get(candidates::timeline))
        // Assessments
        .route(
            "/api/assessments/:job_id",
            get(assessments::get).put(assessments::put),
        )
        .route("/api/assessments/:job_id/submit", post(assessments::submit))
        .with_state(state)
}
