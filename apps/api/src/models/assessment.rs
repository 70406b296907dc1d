use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ShortText,
    LongText,
    SingleChoice,
    MultiChoice,
    Numeric,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
}

/// Makes a question visible only when the referenced question's answer equals
/// `value`. The referenced question always appears earlier in the flattened
/// section/question order (guaranteed at construction time, not at runtime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub question_id: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A submitted response to an assessment, appended to the responses log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub created_at: i64,
    pub response: serde_json::Value,
}

/// An assessment document, keyed 1:1 by job id. Saving is a full replace of
/// the document; submissions append to `responses`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    #[serde(default)]
    pub job_id: String,
    pub title: String,
    pub sections: Json<Vec<Section>>,
    #[serde(default = "empty_responses")]
    pub responses: Json<Vec<SubmissionRecord>>,
}

fn empty_responses() -> Json<Vec<SubmissionRecord>> {
    Json(Vec::new())
}

impl Assessment {
    /// The empty document created when a response arrives for a job that has
    /// no stored assessment yet.
    pub fn skeleton(job_id: &str) -> Self {
        Assessment {
            job_id: job_id.to_string(),
            title: String::new(),
            sections: Json(Vec::new()),
            responses: Json(Vec::new()),
        }
    }
}
