use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::models::assessment::Assessment;
use crate::sim::assessments;
use crate::state::AppState;

/// GET /api/assessments/:job_id
pub async fn get(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Assessment>, ApiError> {
    Ok(Json(assessments::get_assessment(&state, &job_id).await?))
}

/// PUT /api/assessments/:job_id
pub async fn put(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(document): Json<Assessment>,
) -> Result<Json<Assessment>, ApiError> {
    Ok(Json(
        assessments::save_assessment(&state, &job_id, document).await?,
    ))
}

/// POST /api/assessments/:job_id/submit
pub async fn submit(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(response): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    assessments::submit_response(&state, &job_id, response).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
