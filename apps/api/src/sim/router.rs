#![allow(dead_code)]

//! In-process dispatch for the simulated backend.
//!
//! Mirrors the Axum route table one-to-one so a caller holding the
//! `SimulatedBackend` sees exactly the responses the HTTP surface would
//! produce, without a socket in between.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::{ApiRequest, ApiResponse, Method};
use crate::errors::ApiError;
use crate::sim::candidates::{CandidateDraft, CandidateListQuery, CandidatePatch};
use crate::sim::jobs::{JobDraft, JobListQuery, JobPatch, ReorderRequest, JOB_DELETED_MESSAGE};
use crate::sim::{assessments, candidates, jobs};
use crate::state::AppState;

pub async fn dispatch(state: &AppState, request: &ApiRequest) -> ApiResponse {
    match route(state, request).await {
        Ok(response) => response,
        Err(error) => ApiResponse {
            status: error.status().as_u16(),
            body: Some(json!({ "message": error.public_message() })),
        },
    }
}

async fn route(state: &AppState, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
    let path = request.path.trim_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').collect();

    match (request.method, segments.as_slice()) {
        (Method::Get, ["jobs"]) => {
            let query = JobListQuery {
                page: request.param_i64("page"),
                page_size: request.param_i64("pageSize"),
                search: request.param("search"),
                status: request.param("status"),
            };
            Ok(respond(200, &jobs::list_jobs(state, query).await?))
        }
        (Method::Get, ["jobs", "slug", slug]) => {
            Ok(respond(200, &jobs::get_job_by_slug(state, slug).await?))
        }
        (Method::Get, ["jobs", id]) => Ok(respond(200, &jobs::get_job(state, id).await?)),
        (Method::Post, ["jobs"]) => {
            let draft: JobDraft = decode(&request.body)?;
            Ok(respond(201, &jobs::create_job(state, draft).await?))
        }
        (Method::Patch, ["jobs", id, "reorder"]) => {
            let body: ReorderRequest = decode(&request.body)?;
            jobs::reorder_job(state, id, body).await?;
            Ok(respond(200, &json!({ "success": true })))
        }
        (Method::Patch, ["jobs", id]) => {
            let patch: JobPatch = decode(&request.body)?;
            Ok(respond(200, &jobs::patch_job(state, id, patch).await?))
        }
        (Method::Delete, ["jobs", id]) => {
            jobs::delete_job(state, id).await?;
            Ok(respond(200, &json!({ "message": JOB_DELETED_MESSAGE })))
        }

        (Method::Get, ["candidates"]) => {
            let query = CandidateListQuery {
                page: request.param_i64("page"),
                page_size: request.param_i64("pageSize"),
                search: request.param("search"),
                stage: request.param("stage"),
                job_id: request.param("jobId"),
            };
            Ok(respond(200, &candidates::list_candidates(state, query).await?))
        }
        (Method::Get, ["candidates", id, "timeline"]) => {
            Ok(respond(200, &candidates::candidate_timeline(state, id).await?))
        }
        (Method::Get, ["candidates", id]) => {
            Ok(respond(200, &candidates::get_candidate(state, id).await?))
        }
        (Method::Post, ["candidates"]) => {
            let draft: CandidateDraft = decode(&request.body)?;
            Ok(respond(201, &candidates::create_candidate(state, draft).await?))
        }
        (Method::Patch, ["candidates", id]) => {
            let patch: CandidatePatch = decode(&request.body)?;
            Ok(respond(200, &candidates::patch_candidate(state, id, patch).await?))
        }

        (Method::Get, ["assessments", job_id]) => {
            Ok(respond(200, &assessments::get_assessment(state, job_id).await?))
        }
        (Method::Put, ["assessments", job_id]) => {
            let document = decode(&request.body)?;
            Ok(respond(
                200,
                &assessments::save_assessment(state, job_id, document).await?,
            ))
        }
        (Method::Post, ["assessments", job_id, "submit"]) => {
            let response = request.body.clone().unwrap_or(Value::Null);
            assessments::submit_response(state, job_id, response).await?;
            Ok(respond(201, &json!({ "success": true })))
        }

        _ => Err(ApiError::NotFound(format!(
            "No route matched {} /{path}",
            request.method.as_str()
        ))),
    }
}

fn decode<T: DeserializeOwned>(body: &Option<Value>) -> Result<T, ApiError> {
    let value = body.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(value)
        .map_err(|e| ApiError::Validation(format!("Invalid request body: {e}")))
}

fn respond<T: Serialize>(status: u16, payload: &T) -> ApiResponse {
    match serde_json::to_value(payload) {
        Ok(body) => ApiResponse {
            status,
            body: Some(body),
        },
        Err(e) => ApiResponse {
            status: 500,
            body: Some(json!({ "message": format!("Response serialization failed: {e}") })),
        },
    }
}
