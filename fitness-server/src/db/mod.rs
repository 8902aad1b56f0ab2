//! Database Module
//!
//! Handles the SQLite connection pool and table creation at startup

pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const CREATE_MEMBER: &str = "CREATE TABLE IF NOT EXISTS member (
    id INTEGER PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    age VARCHAR(8)
)";

const CREATE_WORKOUT_SESSION: &str = "CREATE TABLE IF NOT EXISTS workout_session (
    session_id INTEGER PRIMARY KEY,
    member_id INTEGER NOT NULL REFERENCES member (id),
    session_date DATE,
    duration_minutes INTEGER,
    activity VARCHAR(255),
    calories_burned INTEGER
)";

const CREATE_SESSION_MEMBER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_workout_session_member ON workout_session (member_id)";

/// Database service owning the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database at `url`, enforce foreign keys and create missing tables
    pub async fn new(url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Each in-memory connection is its own database: keep exactly one alive
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(url = %url, "Database connection established");

        ensure_schema(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create tables: {e}")))?;
        tracing::info!("Database tables ready");

        Ok(Self { pool })
    }

    /// Private in-memory database (tests, demos)
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::new("sqlite::memory:", 1).await
    }
}

/// Create `member` and `workout_session` if absent
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_MEMBER, CREATE_WORKOUT_SESSION, CREATE_SESSION_MEMBER_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
