use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible local default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Seed the store with fixture data on startup when the job collection
    /// is empty. The seed itself is idempotent either way.
    pub seed_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: "hireline.db".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            seed_on_start: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            seed_on_start: std::env::var("SEED_ON_START")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_on_start),
        })
    }
}
