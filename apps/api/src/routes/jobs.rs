use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::models::job::Job;
use crate::sim::jobs::{self, JobDraft, JobListQuery, JobPatch, ReorderRequest, JOB_DELETED_MESSAGE};
use crate::sim::Page;
use crate::state::AppState;

/// GET /api/jobs
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<Page<Job>>, ApiError> {
    Ok(Json(jobs::list_jobs(&state, query).await?))
}

/// GET /api/jobs/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(jobs::get_job(&state, &id).await?))
}

/// GET /api/jobs/slug/:slug
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(jobs::get_job_by_slug(&state, &slug).await?))
}

/// POST /api/jobs
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = jobs::create_job(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/jobs/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<JobPatch>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(jobs::patch_job(&state, &id, patch).await?))
}

/// PATCH /api/jobs/:id/reorder
pub async fn reorder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Value>, ApiError> {
    jobs::reorder_job(&state, &id, body).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/jobs/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    jobs::delete_job(&state, &id).await?;
    Ok(Json(json!({ "message": JOB_DELETED_MESSAGE })))
}
