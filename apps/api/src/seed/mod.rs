//! One-shot fixture seeding. Populates an empty store with a realistic
//! dataset: a job board, a thousand candidates spread across jobs and stages,
//! and an assessment per job built from the template packs.

mod fixtures;

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::models::assessment::{Assessment, Condition, Question, QuestionOption, Section};
use crate::models::candidate::{Candidate, Stage};
use crate::models::job::{Job, JobStatus};
use crate::models::now_ms;
use crate::sim::jobs::slugify;
use crate::store;

use fixtures::{
    AssessmentTemplate, ASSESSMENT_TEMPLATES, FIRST_NAMES, GENERIC_PROFILE, JOB_CATALOG,
    LAST_NAMES, PROFILE_POOLS,
};

pub const CANDIDATE_COUNT: usize = 1000;

const DAY_MS: i64 = 86_400_000;

const STAGES: &[Stage] = &[
    Stage::Applied,
    Stage::Screen,
    Stage::Tech,
    Stage::Offer,
    Stage::Hired,
    Stage::Rejected,
];

/// Seeds jobs, candidates, and assessments into an empty store. A non-empty
/// jobs table marks the store as already seeded and the call is a no-op.
pub async fn seed_store(pool: &SqlitePool) -> anyhow::Result<()> {
    if store::jobs::count(pool).await? > 0 {
        info!("store already seeded, skipping");
        return Ok(());
    }

    let jobs = build_jobs();
    let candidates = build_candidates(&jobs, CANDIDATE_COUNT);
    let assessments = build_assessments(&jobs);

    store::jobs::bulk_add(pool, &jobs).await?;
    store::candidates::bulk_add(pool, &candidates).await?;
    store::assessments::bulk_add(pool, &assessments).await?;

    info!(
        jobs = jobs.len(),
        candidates = candidates.len(),
        assessments = assessments.len(),
        "seeded store"
    );
    Ok(())
}

/// One job per catalog entry, ranked in catalog order with every fifth job
/// archived and creation dates spread one day apart going backwards.
fn build_jobs() -> Vec<Job> {
    let now = now_ms();
    JOB_CATALOG
        .iter()
        .enumerate()
        .map(|(i, template)| Job {
            id: Uuid::new_v4().to_string(),
            slug: slugify(template.title),
            title: template.title.to_string(),
            summary: template.summary.to_string(),
            tags: Json(template.tags.iter().map(|t| t.to_string()).collect()),
            status: if i % 5 == 0 {
                JobStatus::Archived
            } else {
                JobStatus::Active
            },
            order: i as i64 + 1,
            created_at: now - i as i64 * DAY_MS,
        })
        .collect()
}

fn build_candidates(jobs: &[Job], count: usize) -> Vec<Candidate> {
    let mut rng = rand::thread_rng();
    let mut taken_emails: HashSet<String> = HashSet::new();

    (0..count)
        .map(|_| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Doe");
            let email = unique_email(first, last, &mut taken_emails);

            let job = jobs.choose(&mut rng);
            let stage = STAGES.choose(&mut rng).copied().unwrap_or(Stage::Applied);

            // Timelines start empty even off-stage; history accrues only
            // through the patch endpoint.
            Candidate {
                id: Uuid::new_v4().to_string(),
                name: format!("{first} {last}"),
                email,
                job_id: job.map(|j| j.id.clone()).unwrap_or_default(),
                stage,
                profile: profile_for(job),
                timeline: Json(Vec::new()),
            }
        })
        .collect()
}

fn unique_email(first: &str, last: &str, taken: &mut HashSet<String>) -> String {
    let base = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
    let mut email = format!("{base}@example.com");
    let mut n = 2;
    while !taken.insert(email.clone()) {
        email = format!("{base}{n}@example.com");
        n += 1;
    }
    email
}

/// Picks a profile blurb from the pool matching the job's first pooled tag.
fn profile_for(job: Option<&Job>) -> String {
    let mut rng = rand::thread_rng();
    job.and_then(|job| {
        job.tags.iter().find_map(|tag| {
            PROFILE_POOLS
                .iter()
                .find(|pool| pool.tag == tag)
                .and_then(|pool| pool.profiles.choose(&mut rng))
        })
    })
    .copied()
    .unwrap_or(GENERIC_PROFILE)
    .to_string()
}

/// One assessment per job, cycling through the template packs.
fn build_assessments(jobs: &[Job]) -> Vec<Assessment> {
    jobs.iter()
        .enumerate()
        .map(|(i, job)| {
            let template = &ASSESSMENT_TEMPLATES[i % ASSESSMENT_TEMPLATES.len()];
            instantiate_template(job, template)
        })
        .collect()
}

/// Expands a template into a concrete document with generated ids. Condition
/// labels resolve through a running label→id map, so a question can only ever
/// reference one that precedes it.
fn instantiate_template(job: &Job, template: &AssessmentTemplate) -> Assessment {
    let mut ids_by_label: HashMap<&str, String> = HashMap::new();

    let sections = template
        .sections
        .iter()
        .map(|section| Section {
            id: Uuid::new_v4().to_string(),
            title: section.title.to_string(),
            questions: section
                .questions
                .iter()
                .map(|q| {
                    let id = Uuid::new_v4().to_string();
                    let condition = q.condition.and_then(|(label, value)| {
                        ids_by_label.get(label).map(|question_id| Condition {
                            question_id: question_id.clone(),
                            value: value.to_string(),
                        })
                    });
                    ids_by_label.insert(q.label, id.clone());
                    Question {
                        id,
                        label: q.label.to_string(),
                        kind: q.kind,
                        required: q.required,
                        options: if q.options.is_empty() {
                            None
                        } else {
                            Some(
                                q.options
                                    .iter()
                                    .map(|value| QuestionOption {
                                        value: value.to_string(),
                                    })
                                    .collect(),
                            )
                        },
                        min: q.min,
                        max: q.max,
                        condition,
                    }
                })
                .collect(),
        })
        .collect();

    Assessment {
        job_id: job.id.clone(),
        title: format!("{} Assessment", job.title),
        sections: Json(sections),
        responses: Json(Vec::new()),
    }
}
