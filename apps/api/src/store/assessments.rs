use sqlx::SqlitePool;

use crate::models::assessment::Assessment;

const COLUMNS: &str = "job_id, title, sections, responses";

pub async fn get(pool: &SqlitePool, job_id: &str) -> Result<Option<Assessment>, sqlx::Error> {
    sqlx::query_as::<_, Assessment>(&format!(
        "SELECT {COLUMNS} FROM assessments WHERE job_id = ?"
    ))
    .bind(job_id)
    .fetch_optional(pool)
    .await
}

/// Upsert by job id: saving an assessment is always a full document replace.
pub async fn put(pool: &SqlitePool, assessment: &Assessment) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR REPLACE INTO assessments (job_id, title, sections, responses)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&assessment.job_id)
    .bind(&assessment.title)
    .bind(assessment.sections.clone())
    .bind(assessment.responses.clone())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn bulk_add(pool: &SqlitePool, assessments: &[Assessment]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for assessment in assessments {
        sqlx::query(
            "INSERT INTO assessments (job_id, title, sections, responses)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&assessment.job_id)
        .bind(&assessment.title)
        .bind(assessment.sections.clone())
        .bind(assessment.responses.clone())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM assessments")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::memory_pool;

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let pool = memory_pool().await;
        let mut doc = Assessment::skeleton("job-1");
        doc.title = "Backend Assessment".to_string();
        put(&pool, &doc).await.unwrap();

        let loaded = get(&pool, "job-1").await.unwrap().unwrap();
        assert_eq!(loaded.title, "Backend Assessment");
        assert!(loaded.sections.is_empty());
        assert!(get(&pool, "job-2").await.unwrap().is_none());
    }
}
