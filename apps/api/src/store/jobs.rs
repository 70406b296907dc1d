use sqlx::SqlitePool;

use crate::models::job::Job;

const COLUMNS: &str = "id, slug, title, summary, tags, status, ord, created_at";

pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!("SELECT {COLUMNS} FROM jobs WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!("SELECT {COLUMNS} FROM jobs WHERE slug = ?"))
        .bind(slug)
        .fetch_optional(pool)
        .await
}

/// Full scan, ascending by rank.
pub async fn all(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!("SELECT {COLUMNS} FROM jobs ORDER BY ord ASC"))
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await
}

pub async fn slug_taken(pool: &SqlitePool, slug: &str) -> Result<bool, sqlx::Error> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE slug = ?")
        .bind(slug)
        .fetch_one(pool)
        .await?;
    Ok(n > 0)
}

/// Inserts a new job. Fails with a unique violation if the id or slug exists.
pub async fn insert(pool: &SqlitePool, job: &Job) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO jobs (id, slug, title, summary, tags, status, ord, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&job.id)
    .bind(&job.slug)
    .bind(&job.title)
    .bind(&job.summary)
    .bind(job.tags.clone())
    .bind(job.status)
    .bind(job.order)
    .bind(job.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Upsert by id (put semantics).
pub async fn put(pool: &SqlitePool, job: &Job) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR REPLACE INTO jobs (id, slug, title, summary, tags, status, ord, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&job.id)
    .bind(&job.slug)
    .bind(&job.title)
    .bind(&job.summary)
    .bind(job.tags.clone())
    .bind(job.status)
    .bind(job.order)
    .bind(job.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn bulk_add(pool: &SqlitePool, jobs: &[Job]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for job in jobs {
        sqlx::query(
            "INSERT INTO jobs (id, slug, title, summary, tags, status, ord, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&job.id)
        .bind(&job.slug)
        .bind(&job.title)
        .bind(&job.summary)
        .bind(job.tags.clone())
        .bind(job.status)
        .bind(job.order)
        .bind(job.created_at)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

/// Persists the rank of every job in `sequence` atomically. Used by reorder:
/// the caller computes the full reindexed sequence, this writes it in one
/// transaction so no interleaved partial ranking is ever visible.
pub async fn persist_order(pool: &SqlitePool, sequence: &[Job]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for job in sequence {
        sqlx::query("UPDATE jobs SET ord = ? WHERE id = ?")
            .bind(job.order)
            .bind(&job.id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await
}

/// Deletes a job and closes the rank gap in one transaction. Remaining jobs
/// are reassigned ord = index + 1 in their prior relative sequence. Returns
/// false when the id was absent (nothing is written).
pub async fn delete_with_reindex(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM jobs WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    if deleted == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    let remaining: Vec<Job> =
        sqlx::query_as::<_, Job>(&format!("SELECT {COLUMNS} FROM jobs ORDER BY ord ASC"))
            .fetch_all(&mut *tx)
            .await?;
    for (idx, job) in remaining.iter().enumerate() {
        sqlx::query("UPDATE jobs SET ord = ? WHERE id = ?")
            .bind(idx as i64 + 1)
            .bind(&job.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::memory_pool;
    use sqlx::types::Json;

    fn job(id: &str, slug: &str, order: i64) -> Job {
        Job {
            id: id.to_string(),
            slug: slug.to_string(),
            title: format!("Job {id}"),
            summary: String::new(),
            tags: Json(vec!["backend".to_string()]),
            status: crate::models::job::JobStatus::Active,
            order,
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let pool = memory_pool().await;
        insert(&pool, &job("a", "a", 1)).await.unwrap();
        assert!(insert(&pool, &job("a", "a-2", 2)).await.is_err());
    }

    #[tokio::test]
    async fn test_indexed_slug_lookup() {
        let pool = memory_pool().await;
        insert(&pool, &job("a", "senior-engineer", 1)).await.unwrap();
        let found = get_by_slug(&pool, "senior-engineer").await.unwrap();
        assert_eq!(found.unwrap().id, "a");
        assert!(get_by_slug(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persist_order_updates_every_row() {
        let pool = memory_pool().await;
        for i in 1..=3 {
            insert(&pool, &job(&i.to_string(), &format!("j-{i}"), i)).await.unwrap();
        }
        let mut sequence = all(&pool).await.unwrap();
        sequence.reverse();
        for (idx, j) in sequence.iter_mut().enumerate() {
            j.order = idx as i64 + 1;
        }
        persist_order(&pool, &sequence).await.unwrap();

        let reloaded = all(&pool).await.unwrap();
        let ids: Vec<&str> = reloaded.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
        let orders: Vec<i64> = reloaded.iter().map(|j| j.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_with_reindex_closes_gap() {
        let pool = memory_pool().await;
        for i in 1..=5 {
            insert(&pool, &job(&i.to_string(), &format!("j-{i}"), i)).await.unwrap();
        }
        assert!(delete_with_reindex(&pool, "3").await.unwrap());

        let remaining = all(&pool).await.unwrap();
        let ids: Vec<&str> = remaining.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
        let orders: Vec<i64> = remaining.iter().map(|j| j.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_delete_with_reindex_missing_id() {
        let pool = memory_pool().await;
        insert(&pool, &job("1", "j-1", 1)).await.unwrap();
        assert!(!delete_with_reindex(&pool, "ghost").await.unwrap());
        assert_eq!(count(&pool).await.unwrap(), 1);
    }
}
