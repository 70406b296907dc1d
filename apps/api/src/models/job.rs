use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Archived => "archived",
        }
    }
}

/// A job posting. `order` is a dense 1-based rank, unique across all jobs;
/// every mutation that touches ordering must leave the full set contiguous
/// at 1..N.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub tags: Json<Vec<String>>,
    pub status: JobStatus,
    #[sqlx(rename = "ord")]
    pub order: i64,
    pub created_at: i64,
}
