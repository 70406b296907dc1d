//! Shared test helpers. Compiled only for tests.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::run_migrations;
use crate::sim::chaos::NoChaos;
use crate::state::AppState;

/// A fresh in-memory database with the schema applied. Capped at one
/// connection so every query sees the same in-memory instance.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

/// App state over a fresh in-memory database with chaos disabled, so tests
/// see no injected latency and no injected failures.
pub async fn test_state() -> AppState {
    AppState {
        db: memory_pool().await,
        chaos: Arc::new(NoChaos),
        config: Config::default(),
    }
}
