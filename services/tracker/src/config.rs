use std::time::Duration;

use sea_orm::ConnectOptions;
use serde::Deserialize;

use medialog_core::config::Config;

/// Tracker store configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Store connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Pool size (default 10). Env var: `DB_MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
    /// Log every SQL statement (default false). Env var: `DB_SQLX_LOGGING`.
    #[serde(default)]
    pub db_sqlx_logging: bool,
}

fn default_max_connections() -> u32 {
    10
}

impl Config for TrackerConfig {}

impl TrackerConfig {
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.database_url.clone());
        opts.max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(self.db_sqlx_logging);
        opts
    }
}
