use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::assessment::{Assessment, SubmissionRecord};
use crate::models::now_ms;
use crate::sim::WRITE_FAILURE_RATE;
use crate::state::AppState;
use crate::store;

/// GET assessments/:jobId
pub async fn get_assessment(state: &AppState, job_id: &str) -> Result<Assessment, ApiError> {
    state.chaos.delay().await;
    store::assessments::get(&state.db, job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))
}

/// PUT assessments/:jobId: full document replace. The stored jobId is
/// always the path parameter, regardless of what the body claims.
pub async fn save_assessment(
    state: &AppState,
    job_id: &str,
    mut document: Assessment,
) -> Result<Assessment, ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(WRITE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated write failure".to_string()));
    }

    document.job_id = job_id.to_string();
    store::assessments::put(&state.db, &document).await?;
    Ok(document)
}

/// POST assessments/:jobId/submit: appends to the responses log, creating an
/// empty skeleton document first if no assessment exists for the job.
pub async fn submit_response(
    state: &AppState,
    job_id: &str,
    response: serde_json::Value,
) -> Result<(), ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(WRITE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated write failure".to_string()));
    }

    let mut assessment = store::assessments::get(&state.db, job_id)
        .await?
        .unwrap_or_else(|| Assessment::skeleton(job_id));
    assessment.responses.push(SubmissionRecord {
        id: Uuid::new_v4().to_string(),
        created_at: now_ms(),
        response,
    });
    store::assessments::put(&state.db, &assessment).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_state;
    use serde_json::json;
    use sqlx::types::Json;

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let state = test_state().await;
        let err = get_assessment(&state, "job-1").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_save_forces_job_id_from_path() {
        let state = test_state().await;
        let mut doc = Assessment::skeleton("bogus-claim");
        doc.title = "Skills Check".to_string();

        let saved = save_assessment(&state, "job-1", doc).await.unwrap();
        assert_eq!(saved.job_id, "job-1");

        let loaded = get_assessment(&state, "job-1").await.unwrap();
        assert_eq!(loaded.title, "Skills Check");
    }

    #[tokio::test]
    async fn test_save_replaces_whole_document() {
        let state = test_state().await;
        let mut first = Assessment::skeleton("job-1");
        first.title = "v1".to_string();
        first.responses = Json(vec![SubmissionRecord {
            id: "r1".to_string(),
            created_at: 0,
            response: json!({"q": "a"}),
        }]);
        save_assessment(&state, "job-1", first).await.unwrap();

        let mut second = Assessment::skeleton("job-1");
        second.title = "v2".to_string();
        save_assessment(&state, "job-1", second).await.unwrap();

        let loaded = get_assessment(&state, "job-1").await.unwrap();
        assert_eq!(loaded.title, "v2");
        assert!(loaded.responses.is_empty());
    }

    #[tokio::test]
    async fn test_submit_twice_shares_one_skeleton() {
        let state = test_state().await;
        submit_response(&state, "job-1", json!({"q1": "yes"}))
            .await
            .unwrap();
        submit_response(&state, "job-1", json!({"q1": "no"}))
            .await
            .unwrap();

        let assessment = get_assessment(&state, "job-1").await.unwrap();
        assert_eq!(assessment.title, "");
        assert!(assessment.sections.is_empty());
        assert_eq!(assessment.responses.len(), 2);
        assert_eq!(assessment.responses[0].response, json!({"q1": "yes"}));
        assert_eq!(assessment.responses[1].response, json!({"q1": "no"}));
    }
}
