use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use tracing::info;

/// Schema version stamped into `PRAGMA user_version`. The index list is fixed
/// at version 1.
const SCHEMA_VERSION: i64 = 1;

const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id          TEXT PRIMARY KEY,
    slug        TEXT NOT NULL UNIQUE,
    title       TEXT NOT NULL,
    summary     TEXT NOT NULL DEFAULT '',
    tags        TEXT NOT NULL DEFAULT '[]',
    status      TEXT NOT NULL DEFAULT 'active',
    ord         INTEGER NOT NULL,
    created_at  INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_jobs_ord ON jobs(ord);
CREATE INDEX IF NOT EXISTS idx_jobs_status ON jobs(status);
CREATE INDEX IF NOT EXISTS idx_jobs_title ON jobs(title);

CREATE TABLE IF NOT EXISTS candidates (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL COLLATE NOCASE,
    job_id      TEXT NOT NULL,
    stage       TEXT NOT NULL DEFAULT 'applied',
    profile     TEXT NOT NULL DEFAULT '',
    timeline    TEXT NOT NULL DEFAULT '[]'
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_candidates_email ON candidates(email);
CREATE INDEX IF NOT EXISTS idx_candidates_job ON candidates(job_id);
CREATE INDEX IF NOT EXISTS idx_candidates_stage ON candidates(stage);
CREATE INDEX IF NOT EXISTS idx_candidates_name ON candidates(name);

CREATE TABLE IF NOT EXISTS assessments (
    job_id      TEXT PRIMARY KEY,
    title       TEXT NOT NULL DEFAULT '',
    sections    TEXT NOT NULL DEFAULT '[]',
    responses   TEXT NOT NULL DEFAULT '[]'
);
"#;

/// Creates and returns a SQLite connection pool, creating the database file
/// if it does not exist yet.
pub async fn create_pool(path: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {path}");

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Applies the schema if the database is fresh and stamps the version.
/// A database already at the current version is left untouched.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;

    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    pool.execute(SCHEMA_V1).await?;
    sqlx::query("PRAGMA user_version = 1").execute(pool).await?;
    info!("Applied schema version {SCHEMA_VERSION}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_stamp_version() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        let version: i64 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);

        // Re-running against a current database is a no-op.
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_pool_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let pool = create_pool(path.to_str().unwrap()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(path.exists());
    }
}
