use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::ApiError;
use crate::models::candidate::Candidate;
use crate::sim::candidates::{
    self, CandidateDraft, CandidateListQuery, CandidatePatch, TimelineResponse,
};
use crate::sim::Page;
use crate::state::AppState;

/// GET /api/candidates
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<Json<Page<Candidate>>, ApiError> {
    Ok(Json(candidates::list_candidates(&state, query).await?))
}

/// GET /api/candidates/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, ApiError> {
    Ok(Json(candidates::get_candidate(&state, &id).await?))
}

/// POST /api/candidates
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<CandidateDraft>,
) -> Result<(StatusCode, Json<Candidate>), ApiError> {
    let candidate = candidates::create_candidate(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// PATCH /api/candidates/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CandidatePatch>,
) -> Result<Json<Candidate>, ApiError> {
    Ok(Json(candidates::patch_candidate(&state, &id, patch).await?))
}

/// GET /api/candidates/:id/timeline
pub async fn timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TimelineResponse>, ApiError> {
    Ok(Json(candidates::candidate_timeline(&state, &id).await?))
}
