use sqlx::SqlitePool;

use crate::models::candidate::Candidate;

const COLUMNS: &str = "id, name, email, job_id, stage, profile, timeline";

pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Full scan in primary-key order (stable pagination for the list endpoint).
pub async fn all(pool: &SqlitePool) -> Result<Vec<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates ORDER BY id ASC"))
        .fetch_all(pool)
        .await
}

/// Indexed lookup by email. The column carries `COLLATE NOCASE`, so the
/// match is case-insensitive.
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(&format!("SELECT {COLUMNS} FROM candidates WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &SqlitePool, candidate: &Candidate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO candidates (id, name, email, job_id, stage, profile, timeline)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&candidate.id)
    .bind(&candidate.name)
    .bind(&candidate.email)
    .bind(&candidate.job_id)
    .bind(candidate.stage)
    .bind(&candidate.profile)
    .bind(candidate.timeline.clone())
    .execute(pool)
    .await?;
    Ok(())
}

/// Upsert by id (put semantics).
pub async fn put(pool: &SqlitePool, candidate: &Candidate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR REPLACE INTO candidates (id, name, email, job_id, stage, profile, timeline)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&candidate.id)
    .bind(&candidate.name)
    .bind(&candidate.email)
    .bind(&candidate.job_id)
    .bind(candidate.stage)
    .bind(&candidate.profile)
    .bind(candidate.timeline.clone())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn bulk_add(pool: &SqlitePool, candidates: &[Candidate]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for candidate in candidates {
        sqlx::query(
            "INSERT INTO candidates (id, name, email, job_id, stage, profile, timeline)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.job_id)
        .bind(candidate.stage)
        .bind(&candidate.profile)
        .bind(candidate.timeline.clone())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await
}
