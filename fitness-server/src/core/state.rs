//! Server state shared by all handlers

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Handler state
///
/// The storage client is built explicitly and handed to the router, so
/// tests can construct one over an in-memory database.
#[derive(Clone)]
pub struct ServerState {
    pub db: DbService,
}

impl ServerState {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Connect to the configured database and create missing tables
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
