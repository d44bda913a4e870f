use sqlx::SqlitePool;
use std::time::Instant;

use crate::core::Config;
use crate::db::DbService;

/// Server state, cloned into every handler
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | db | SQLite connection pool |
/// | started_at | process start, for uptime in health checks |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// Open the database named by the configuration and build the state
    pub async fn initialize(config: &Config) -> Result<Self, shared::AppError> {
        let db = DbService::with_max_connections(&config.database_path, config.db_max_connections)
            .await?;
        Ok(Self::new(config.clone(), db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
