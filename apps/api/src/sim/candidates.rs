use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::candidate::{Candidate, Stage, TimelineEvent};
use crate::models::now_ms;
use crate::sim::{
    paginate, Page, CREATE_FAILURE_RATE, DEFAULT_CANDIDATE_PAGE_SIZE, WRITE_FAILURE_RATE,
};
use crate::state::AppState;
use crate::store;

const DEFAULT_PROFILE: &str = "No profile summary provided.";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Case-insensitive substring match on name or email.
    pub search: Option<String>,
    pub stage: Option<String>,
    pub job_id: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_id: Option<String>,
    pub profile: Option<String>,
}

/// Shallow-merge patch. `note` and `add_note_only` direct the timeline
/// append and are not persisted as record fields.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_id: Option<String>,
    pub profile: Option<String>,
    pub stage: Option<Stage>,
    pub note: Option<String>,
    pub add_note_only: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub timeline: Vec<TimelineEvent>,
}

/// GET candidates: exact jobId/stage filters, substring search, paginated.
pub async fn list_candidates(
    state: &AppState,
    query: CandidateListQuery,
) -> Result<Page<Candidate>, ApiError> {
    state.chaos.delay().await;

    let search = query.search.unwrap_or_default().to_lowercase();
    let stage = query.stage.unwrap_or_default();
    let job_id = query.job_id.unwrap_or_default();

    let mut candidates = store::candidates::all(&state.db).await?;
    if !job_id.is_empty() {
        candidates.retain(|c| c.job_id == job_id);
    }
    if !search.is_empty() {
        candidates.retain(|c| {
            c.name.to_lowercase().contains(&search) || c.email.to_lowercase().contains(&search)
        });
    }
    if !stage.is_empty() {
        candidates.retain(|c| c.stage.as_str() == stage);
    }

    Ok(paginate(
        candidates,
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_CANDIDATE_PAGE_SIZE),
    ))
}

/// GET candidates/:id
pub async fn get_candidate(state: &AppState, id: &str) -> Result<Candidate, ApiError> {
    state.chaos.delay().await;
    store::candidates::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Candidate not found".to_string()))
}

/// POST candidates: always starts at `applied` with an empty timeline.
/// Rejects a duplicate email case-insensitively with a conflict.
pub async fn create_candidate(
    state: &AppState,
    draft: CandidateDraft,
) -> Result<Candidate, ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(CREATE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure(
            "Simulated candidate creation failure".to_string(),
        ));
    }

    let (name, email, job_id) = match (draft.name, draft.email, draft.job_id) {
        (Some(n), Some(e), Some(j)) if !n.is_empty() && !e.is_empty() && !j.is_empty() => {
            (n, e, j)
        }
        _ => {
            return Err(ApiError::Validation(
                "Name, email, and jobId are required".to_string(),
            ))
        }
    };

    if store::candidates::find_by_email(&state.db, &email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Email is already taken.".to_string()));
    }

    let candidate = Candidate {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        job_id,
        stage: Stage::Applied,
        profile: draft.profile.unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
        timeline: Json(Vec::new()),
    };
    store::candidates::insert(&state.db, &candidate).await?;
    Ok(candidate)
}

/// PATCH candidates/:id: shallow merge, plus at most one timeline append:
/// a stage change logs a transition event carrying the optional note; an
/// unchanged stage with `addNoteOnly` logs a from==to annotation. A stage
/// change with a note yields exactly one event, never two.
pub async fn patch_candidate(
    state: &AppState,
    id: &str,
    patch: CandidatePatch,
) -> Result<Candidate, ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(WRITE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated write failure".to_string()));
    }

    let mut candidate = store::candidates::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    if let Some(name) = patch.name {
        candidate.name = name;
    }
    if let Some(email) = patch.email {
        candidate.email = email;
    }
    if let Some(job_id) = patch.job_id {
        candidate.job_id = job_id;
    }
    if let Some(profile) = patch.profile {
        candidate.profile = profile;
    }

    let current = candidate.stage;
    match patch.stage {
        Some(next) if next != current => {
            candidate.timeline.push(TimelineEvent {
                timestamp: now_ms(),
                from: current,
                to: next,
                note: patch.note.unwrap_or_default(),
            });
            candidate.stage = next;
        }
        _ => {
            if patch.add_note_only {
                if let Some(note) = patch.note.filter(|n| !n.is_empty()) {
                    candidate.timeline.push(TimelineEvent {
                        timestamp: now_ms(),
                        from: current,
                        to: current,
                        note,
                    });
                }
            }
        }
    }

    store::candidates::put(&state.db, &candidate).await?;
    Ok(candidate)
}

/// GET candidates/:id/timeline
pub async fn candidate_timeline(state: &AppState, id: &str) -> Result<TimelineResponse, ApiError> {
    state.chaos.delay().await;
    let candidate = store::candidates::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;
    Ok(TimelineResponse {
        timeline: candidate.timeline.0,
    })
}
