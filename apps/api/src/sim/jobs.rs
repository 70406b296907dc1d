use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::job::{Job, JobStatus};
use crate::models::now_ms;
use crate::sim::{
    paginate, Page, CREATE_FAILURE_RATE, DEFAULT_JOB_PAGE_SIZE, REORDER_FAILURE_RATE,
    WRITE_FAILURE_RATE,
};
use crate::state::AppState;
use crate::store;

pub const JOB_DELETED_MESSAGE: &str = "Job deleted successfully";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    /// Exact status match; empty selects all.
    pub status: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobDraft {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<JobStatus>,
    pub created_at: Option<i64>,
}

/// Shallow-merge patch. Rank and creation time are deliberately absent:
/// `order` moves only through the reorder endpoint.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub from_order: i64,
    pub to_order: i64,
}

/// GET jobs: filter by search/status, sort by rank, paginate.
pub async fn list_jobs(state: &AppState, query: JobListQuery) -> Result<Page<Job>, ApiError> {
    state.chaos.delay().await;

    let search = query.search.unwrap_or_default().to_lowercase();
    let status = query.status.unwrap_or_default();

    let mut jobs = store::jobs::all(&state.db).await?;
    if !search.is_empty() {
        jobs.retain(|j| {
            j.title.to_lowercase().contains(&search)
                || j.tags.iter().any(|t| t.to_lowercase().contains(&search))
        });
    }
    if !status.is_empty() {
        jobs.retain(|j| j.status.as_str() == status);
    }
    jobs.sort_by_key(|j| j.order);

    Ok(paginate(
        jobs,
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_JOB_PAGE_SIZE),
    ))
}

/// GET jobs/:id
pub async fn get_job(state: &AppState, id: &str) -> Result<Job, ApiError> {
    state.chaos.delay().await;
    store::jobs::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
}

/// GET jobs/slug/:slug
pub async fn get_job_by_slug(state: &AppState, slug: &str) -> Result<Job, ApiError> {
    state.chaos.delay().await;
    store::jobs::get_by_slug(&state.db, slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))
}

/// POST jobs: derives a unique slug and appends at the end of the ranking.
pub async fn create_job(state: &AppState, draft: JobDraft) -> Result<Job, ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(CREATE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated write failure".to_string()));
    }

    let title = match draft.title {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(ApiError::Validation("Title is required".to_string())),
    };

    let id = draft.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let base = slugify(draft.slug.as_deref().unwrap_or(&title));
    let slug = dedupe_slug(&state.db, &base).await?;
    let order = store::jobs::count(&state.db).await? + 1;

    let job = Job {
        id,
        slug,
        title,
        summary: draft.summary.unwrap_or_default(),
        tags: Json(draft.tags.unwrap_or_default()),
        status: draft.status.unwrap_or(JobStatus::Active),
        order,
        created_at: draft.created_at.unwrap_or_else(now_ms),
    };
    store::jobs::insert(&state.db, &job).await?;
    Ok(job)
}

/// PATCH jobs/:id: shallow merge; no slug or rank recomputation.
pub async fn patch_job(state: &AppState, id: &str, patch: JobPatch) -> Result<Job, ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(WRITE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated write failure".to_string()));
    }

    let mut job = store::jobs::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    if let Some(title) = patch.title {
        job.title = title;
    }
    if let Some(slug) = patch.slug {
        job.slug = slug;
    }
    if let Some(summary) = patch.summary {
        job.summary = summary;
    }
    if let Some(tags) = patch.tags {
        job.tags = Json(tags);
    }
    if let Some(status) = patch.status {
        job.status = status;
    }

    store::jobs::put(&state.db, &job).await?;
    Ok(job)
}

/// PATCH jobs/:id/reorder: a full-list reindex, not a local swap. The moved
/// job lands at `toOrder` and every other job is reassigned ord = index + 1,
/// so gaps and ties are impossible by construction. Persisted atomically.
pub async fn reorder_job(
    state: &AppState,
    id: &str,
    request: ReorderRequest,
) -> Result<(), ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(REORDER_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated reorder failure".to_string()));
    }

    let mut sequence = store::jobs::all(&state.db).await?;
    let position = sequence
        .iter()
        .position(|j| j.id == id)
        .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

    debug!(
        job = %id,
        from_order = request.from_order,
        to_order = request.to_order,
        "reordering job"
    );

    let moving = sequence.remove(position);
    let insert_at = (request.to_order - 1).clamp(0, sequence.len() as i64) as usize;
    sequence.insert(insert_at, moving);
    for (idx, job) in sequence.iter_mut().enumerate() {
        job.order = idx as i64 + 1;
    }

    store::jobs::persist_order(&state.db, &sequence).await?;
    Ok(())
}

/// DELETE jobs/:id: removes the record and closes the rank gap atomically.
/// Candidates referencing the job are left untouched.
pub async fn delete_job(state: &AppState, id: &str) -> Result<(), ApiError> {
    state.chaos.delay().await;
    if state.chaos.should_fail(WRITE_FAILURE_RATE) {
        return Err(ApiError::SimulatedFailure("Simulated delete failure".to_string()));
    }

    if !store::jobs::delete_with_reindex(&state.db, id).await? {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }
    Ok(())
}

/// Normalizes a title into a slug: lowercase, whitespace to hyphens, strip
/// everything outside `[a-z0-9_-]`, truncate to 80 characters.
pub fn slugify(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(80)
        .collect()
}

/// Resolves slug collisions by appending `-2`, `-3`, ... until unique.
async fn dedupe_slug(pool: &SqlitePool, base: &str) -> Result<String, sqlx::Error> {
    let mut slug = base.to_string();
    let mut attempt = 1;
    while store::jobs::slug_taken(pool, &slug).await? {
        attempt += 1;
        slug = format!("{base}-{attempt}");
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_state;

    async fn create_titled(state: &AppState, title: &str) -> Job {
        create_job(
            state,
            JobDraft {
                title: Some(title.to_string()),
                ..JobDraft::default()
            },
        )
        .await
        .unwrap()
    }

    fn assert_contiguous(jobs: &[Job]) {
        let mut orders: Vec<i64> = jobs.iter().map(|j| j.order).collect();
        orders.sort_unstable();
        let expected: Vec<i64> = (1..=jobs.len() as i64).collect();
        assert_eq!(orders, expected, "order values must be exactly 1..N");
    }

    #[test]
    fn test_slugify_normalization() {
        assert_eq!(slugify("Senior Engineer"), "senior-engineer");
        // Hyphens from token joins survive stripping; they are not collapsed.
        assert_eq!(slugify("  C++ / Rust  Dev! "), "c--rust-dev");
        let long = "x".repeat(120);
        assert_eq!(slugify(&long).len(), 80);
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let state = test_state().await;
        let err = create_job(&state, JobDraft::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = create_job(
            &state,
            JobDraft {
                title: Some("   ".to_string()),
                ..JobDraft::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_slug_collisions_get_numeric_suffixes() {
        let state = test_state().await;
        let first = create_titled(&state, "Senior Engineer").await;
        let second = create_titled(&state, "Senior Engineer").await;
        let third = create_titled(&state, "Senior Engineer").await;
        assert_eq!(first.slug, "senior-engineer");
        assert_eq!(second.slug, "senior-engineer-2");
        assert_eq!(third.slug, "senior-engineer-3");
    }

    #[tokio::test]
    async fn test_create_assigns_next_order() {
        let state = test_state().await;
        for expected in 1..=4 {
            let job = create_titled(&state, &format!("Job {expected}")).await;
            assert_eq!(job.order, expected);
        }
        assert_contiguous(&store::jobs::all(&state.db).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_closes_the_gap() {
        let state = test_state().await;
        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(create_titled(&state, &format!("Job {i}")).await.id);
        }

        delete_job(&state, &ids[2]).await.unwrap();

        let remaining = store::jobs::all(&state.db).await.unwrap();
        assert_contiguous(&remaining);
        let sequence: Vec<&str> = remaining.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(sequence, vec![&ids[0], &ids[1], &ids[3], &ids[4]]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_404() {
        let state = test_state().await;
        let err = delete_job(&state, "ghost").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reorder_shifts_displaced_jobs() {
        let state = test_state().await;
        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(create_titled(&state, &format!("Job {i}")).await.id);
        }

        // Move the job at order 5 to order 2: jobs previously at 2,3,4 shift
        // to 3,4,5.
        reorder_job(
            &state,
            &ids[4],
            ReorderRequest {
                from_order: 5,
                to_order: 2,
            },
        )
        .await
        .unwrap();

        let jobs = store::jobs::all(&state.db).await.unwrap();
        assert_contiguous(&jobs);
        let sequence: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(sequence, vec![&ids[0], &ids[4], &ids[1], &ids[2], &ids[3]]);
    }

    #[tokio::test]
    async fn test_reorder_clamps_out_of_range_target() {
        let state = test_state().await;
        let mut ids = Vec::new();
        for i in 1..=3 {
            ids.push(create_titled(&state, &format!("Job {i}")).await.id);
        }

        reorder_job(
            &state,
            &ids[0],
            ReorderRequest {
                from_order: 1,
                to_order: 99,
            },
        )
        .await
        .unwrap();

        let jobs = store::jobs::all(&state.db).await.unwrap();
        assert_contiguous(&jobs);
        assert_eq!(jobs.last().unwrap().id, ids[0]);
    }

    #[tokio::test]
    async fn test_reorder_unknown_job_is_404() {
        let state = test_state().await;
        create_titled(&state, "Only Job").await;
        let err = reorder_job(
            &state,
            "ghost",
            ReorderRequest {
                from_order: 1,
                to_order: 1,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_filters_and_pre_pagination_total() {
        let state = test_state().await;
        for i in 1..=5 {
            create_job(
                &state,
                JobDraft {
                    title: Some(format!("Engineer {i}")),
                    tags: Some(vec!["backend".to_string()]),
                    ..JobDraft::default()
                },
            )
            .await
            .unwrap();
        }
        create_job(
            &state,
            JobDraft {
                title: Some("Designer".to_string()),
                tags: Some(vec!["design".to_string()]),
                status: Some(JobStatus::Archived),
                ..JobDraft::default()
            },
        )
        .await
        .unwrap();

        // Search matches title or any tag, case-insensitively.
        let page = list_jobs(
            &state,
            JobListQuery {
                search: Some("ENGINEER".to_string()),
                page_size: Some(2),
                ..JobListQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);

        let page = list_jobs(
            &state,
            JobListQuery {
                search: Some("design".to_string()),
                ..JobListQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 1);

        let page = list_jobs(
            &state,
            JobListQuery {
                status: Some("archived".to_string()),
                ..JobListQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Designer");
    }

    #[tokio::test]
    async fn test_patch_merges_without_touching_rank_or_slug() {
        let state = test_state().await;
        let job = create_titled(&state, "Original Title").await;

        let patched = patch_job(
            &state,
            &job.id,
            JobPatch {
                title: Some("New Title".to_string()),
                ..JobPatch::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(patched.title, "New Title");
        assert_eq!(patched.slug, "original-title");
        assert_eq!(patched.order, job.order);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let state = test_state().await;
        let job = create_titled(&state, "Staff Engineer").await;
        let found = get_job_by_slug(&state, "staff-engineer").await.unwrap();
        assert_eq!(found.id, job.id);

        let err = get_job_by_slug(&state, "missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
