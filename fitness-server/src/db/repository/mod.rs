//! Repository Module
//!
//! Row-level CRUD for the `member` and `workout_session` tables. Each
//! function is a single statement against the pool; no transactions span
//! more than one call.

pub mod member;
pub mod workout_session;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl RepoError {
    /// Replace the driver text of a uniqueness failure
    pub fn on_duplicate(self, message: impl FnOnce() -> String) -> Self {
        match self {
            RepoError::Duplicate(_) => RepoError::Duplicate(message()),
            other => other,
        }
    }

    /// Replace the driver text of a foreign-key failure
    pub fn on_foreign_key(self, message: impl FnOnce() -> String) -> Self {
        match self {
            RepoError::ForeignKey(_) => RepoError::ForeignKey(message()),
            other => other,
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepoError::ForeignKey(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
