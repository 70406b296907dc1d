#![allow(dead_code)]

//! Typed request client.
//!
//! Translates method calls into simulated HTTP requests: body serialized to
//! JSON, only non-empty query parameters serialized, method defaulting to
//! POST when a body is present and GET otherwise, `{message}` error bodies
//! surfaced as typed errors. The transport is a strategy picked at
//! construction time: the in-process [`SimulatedBackend`] or the
//! real-network [`HttpBackend`], never a runtime patch.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::assessment::Assessment;
use crate::models::candidate::{Candidate, TimelineEvent};
use crate::models::job::Job;
use crate::sim::candidates::{CandidateDraft, CandidateListQuery, CandidatePatch, TimelineResponse};
use crate::sim::jobs::{JobDraft, JobListQuery, JobPatch, ReorderRequest};
use crate::sim::{router, Page};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A logical request: path relative to the API root plus query parameters
/// and an optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn param(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn param_i64(&self, key: &str) -> Option<i64> {
        self.param(key).and_then(|v| v.parse().ok())
    }
}

/// A transport-level response. `body` is `None` when the payload was not
/// JSON (or the response carried no content).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status; carries its message field.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A non-JSON payload where JSON was expected: a wiring/environment
    /// defect, not a business error.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Transport strategy behind the client.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// In-process transport: requests dispatch straight into the simulated API
/// layer against the shared app state.
pub struct SimulatedBackend {
    state: AppState,
}

impl SimulatedBackend {
    pub fn new(state: AppState) -> Self {
        SimulatedBackend { state }
    }
}

#[async_trait]
impl Backend for SimulatedBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        Ok(router::dispatch(&self.state, &request).await)
    }
}

/// Real-network transport against a served instance of the same API.
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpBackend {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let url = format!("{}/api/{}", self.base_url, request.path);

        let mut builder = self.http.request(method, url);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map_or(false, |v| v.contains("application/json"));

        let body = if is_json && status != 204 {
            Some(response.json::<Value>().await?)
        } else {
            None
        };
        Ok(ApiResponse { status, body })
    }
}

#[derive(Debug, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// The caller-facing API client. Thin: every typed method lowers to a single
/// `call` with a path, params, and optional body.
#[derive(Clone)]
pub struct ApiClient {
    backend: Arc<dyn Backend>,
}

impl ApiClient {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        ApiClient { backend }
    }

    /// Client over the in-process simulated backend.
    pub fn simulated(state: AppState) -> Self {
        Self::new(Arc::new(SimulatedBackend::new(state)))
    }

    /// Client over a real network transport.
    pub fn over_http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpBackend::new(base_url)))
    }

    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let method = options.method.unwrap_or(if options.body.is_some() {
            Method::Post
        } else {
            Method::Get
        });
        // Only truthy parameters make it onto the query string.
        let params = options
            .params
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let response = self
            .backend
            .execute(ApiRequest {
                method,
                path: path.to_string(),
                params,
                body: options.body,
            })
            .await?;

        if !(200..300).contains(&response.status) {
            let message = response
                .body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status: {}", response.status));
            return Err(ClientError::Api {
                status: response.status,
                message,
            });
        }

        match response.body {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
            }
            // 204 carries no value by contract.
            None if response.status == 204 => {
                serde_json::from_value(Value::Null).map_err(|e| ClientError::Decode(e.to_string()))
            }
            None => Err(ClientError::Decode(
                "Received a non-JSON response; the backend is not wired in".to_string(),
            )),
        }
    }

    fn body_of<T: Serialize>(payload: &T) -> Result<Value, ClientError> {
        serde_json::to_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ---- jobs ----

    pub async fn list_jobs(&self, query: &JobListQuery) -> Result<Page<Job>, ClientError> {
        let mut params = Vec::new();
        push_i64(&mut params, "page", query.page);
        push_i64(&mut params, "pageSize", query.page_size);
        push_str(&mut params, "search", query.search.as_deref());
        push_str(&mut params, "status", query.status.as_deref());
        self.call(
            "jobs",
            RequestOptions {
                params,
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, ClientError> {
        self.call(&format!("jobs/{id}"), RequestOptions::default())
            .await
    }

    pub async fn get_job_by_slug(&self, slug: &str) -> Result<Job, ClientError> {
        self.call(&format!("jobs/slug/{slug}"), RequestOptions::default())
            .await
    }

    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job, ClientError> {
        self.call(
            "jobs",
            RequestOptions {
                body: Some(Self::body_of(draft)?),
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn patch_job(&self, id: &str, patch: &JobPatch) -> Result<Job, ClientError> {
        self.call(
            &format!("jobs/{id}"),
            RequestOptions {
                method: Some(Method::Patch),
                body: Some(Self::body_of(patch)?),
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn reorder_job(
        &self,
        id: &str,
        from_order: i64,
        to_order: i64,
    ) -> Result<(), ClientError> {
        let body = Self::body_of(&ReorderRequest {
            from_order,
            to_order,
        })?;
        self.call::<Value>(
            &format!("jobs/{id}/reorder"),
            RequestOptions {
                method: Some(Method::Patch),
                body: Some(body),
                ..RequestOptions::default()
            },
        )
        .await?;
        Ok(())
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        self.call::<Value>(
            &format!("jobs/{id}"),
            RequestOptions {
                method: Some(Method::Delete),
                ..RequestOptions::default()
            },
        )
        .await?;
        Ok(())
    }

    // ---- candidates ----

    pub async fn list_candidates(
        &self,
        query: &CandidateListQuery,
    ) -> Result<Page<Candidate>, ClientError> {
        let mut params = Vec::new();
        push_i64(&mut params, "page", query.page);
        push_i64(&mut params, "pageSize", query.page_size);
        push_str(&mut params, "search", query.search.as_deref());
        push_str(&mut params, "stage", query.stage.as_deref());
        push_str(&mut params, "jobId", query.job_id.as_deref());
        self.call(
            "candidates",
            RequestOptions {
                params,
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn get_candidate(&self, id: &str) -> Result<Candidate, ClientError> {
        self.call(&format!("candidates/{id}"), RequestOptions::default())
            .await
    }

    pub async fn create_candidate(&self, draft: &CandidateDraft) -> Result<Candidate, ClientError> {
        self.call(
            "candidates",
            RequestOptions {
                body: Some(Self::body_of(draft)?),
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn patch_candidate(
        &self,
        id: &str,
        patch: &CandidatePatch,
    ) -> Result<Candidate, ClientError> {
        self.call(
            &format!("candidates/{id}"),
            RequestOptions {
                method: Some(Method::Patch),
                body: Some(Self::body_of(patch)?),
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn candidate_timeline(&self, id: &str) -> Result<Vec<TimelineEvent>, ClientError> {
        let response: TimelineResponse = self
            .call(
                &format!("candidates/{id}/timeline"),
                RequestOptions::default(),
            )
            .await?;
        Ok(response.timeline)
    }

    // ---- assessments ----

    pub async fn assessment(&self, job_id: &str) -> Result<Assessment, ClientError> {
        self.call(&format!("assessments/{job_id}"), RequestOptions::default())
            .await
    }

    pub async fn save_assessment(
        &self,
        job_id: &str,
        document: &Assessment,
    ) -> Result<Assessment, ClientError> {
        self.call(
            &format!("assessments/{job_id}"),
            RequestOptions {
                method: Some(Method::Put),
                body: Some(Self::body_of(document)?),
                ..RequestOptions::default()
            },
        )
        .await
    }

    pub async fn submit_assessment(
        &self,
        job_id: &str,
        response: Value,
    ) -> Result<(), ClientError> {
        self.call::<Value>(
            &format!("assessments/{job_id}/submit"),
            RequestOptions {
                body: Some(response),
                ..RequestOptions::default()
            },
        )
        .await?;
        Ok(())
    }
}

fn push_i64(params: &mut Vec<(String, String)>, key: &str, value: Option<i64>) {
    if let Some(v) = value {
        params.push((key.to_string(), v.to_string()));
    }
}

fn push_str(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        params.push((key.to_string(), v.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_state;
    use serde_json::json;

    async fn client() -> ApiClient {
        ApiClient::simulated(test_state().await)
    }

    #[tokio::test]
    async fn test_create_then_fetch_roundtrip() {
        let client = client().await;
        let created = client
            .create_job(&JobDraft {
                title: Some("Platform Engineer".to_string()),
                tags: Some(vec!["backend".to_string()]),
                ..JobDraft::default()
            })
            .await
            .unwrap();

        let by_id = client.get_job(&created.id).await.unwrap();
        assert_eq!(by_id.slug, "platform-engineer");

        let by_slug = client.get_job_by_slug("platform-engineer").await.unwrap();
        assert_eq!(by_slug.id, created.id);
    }

    #[tokio::test]
    async fn test_not_found_surfaces_status_and_message() {
        let client = client().await;
        let err = client.get_job("ghost").await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Job not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_params_are_dropped() {
        let client = client().await;
        client
            .create_job(&JobDraft {
                title: Some("Solo Job".to_string()),
                ..JobDraft::default()
            })
            .await
            .unwrap();

        // An empty search/status must behave like no filter at all.
        let page = client
            .list_jobs(&JobListQuery {
                search: Some(String::new()),
                status: Some(String::new()),
                ..JobListQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_reorder_through_client() {
        let client = client().await;
        let mut ids = Vec::new();
        for i in 1..=3 {
            let job = client
                .create_job(&JobDraft {
                    title: Some(format!("Job {i}")),
                    ..JobDraft::default()
                })
                .await
                .unwrap();
            ids.push(job.id);
        }

        client.reorder_job(&ids[2], 3, 1).await.unwrap();

        let page = client.list_jobs(&JobListQuery::default()).await.unwrap();
        let sequence: Vec<&str> = page.items.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(sequence, vec![&ids[2], &ids[0], &ids[1]]);
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_400() {
        let client = client().await;
        let err = client.create_job(&JobDraft::default()).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title is required");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_candidate_flow_through_client() {
        let client = client().await;
        let candidate = client
            .create_candidate(&CandidateDraft {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@x.com".to_string()),
                job_id: Some("job-1".to_string()),
                profile: None,
            })
            .await
            .unwrap();

        client
            .patch_candidate(
                &candidate.id,
                &CandidatePatch {
                    stage: Some(crate::models::candidate::Stage::Screen),
                    note: Some("looks great".to_string()),
                    ..CandidatePatch::default()
                },
            )
            .await
            .unwrap();

        let timeline = client.candidate_timeline(&candidate.id).await.unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].note, "looks great");
    }

    #[tokio::test]
    async fn test_assessment_submit_through_client() {
        let client = client().await;
        client
            .submit_assessment("job-9", json!({"q1": "yes"}))
            .await
            .unwrap();

        let assessment = client.assessment("job-9").await.unwrap();
        assert_eq!(assessment.responses.len(), 1);
        assert_eq!(assessment.title, "");
    }
}
