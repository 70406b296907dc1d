use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::sim::chaos::ChaosPolicy;

/// Shared application state injected into all route handlers via Axum
/// extractors, and carried by the in-process simulated backend.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pluggable latency/failure policy. Default: InjectedChaos.
    /// Tests substitute NoChaos for deterministic zero-delay behavior.
    pub chaos: Arc<dyn ChaosPolicy>,
    pub config: Config,
}
