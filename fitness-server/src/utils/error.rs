//! Unified error handling
//!
//! Provides the application-level error type:
//! - [`AppError`] - application error enum, rendered by `IntoResponse`
//! - [`ErrorBody`] - JSON body for every non-validation failure
//!
//! # Error codes
//!
//! | Code | Status | Meaning |
//! |------|--------|---------|
//! | E0002 | 400 | validation failed (body is the bare field map) |
//! | E0003 | 404 | resource not found |
//! | E0004 | 409 | duplicate key / foreign key conflict |
//! | E9002 | 500 | database error |
//!
//! # Example
//!
//! ```ignore
//! Err(AppError::not_found(format!("Member {id}")))
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::db::repository::RepoError;
use crate::schema::ValidationErrors;

/// Error response body
///
/// ```json
/// { "code": "E0003", "message": "Member 5 not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// Request body failed the schema (400)
    Validation(ValidationErrors),

    #[error("Resource not found: {0}")]
    /// Referenced primary key is absent (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// Write rejected by a storage constraint (409)
    Conflict(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Storage failure (500)
    Database(String),
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::Validation(errors) => {
                warn!(target: "validation", errors = %errors, "Validation Error");
                return (status, Json(errors)).into_response();
            }
            AppError::NotFound(msg) => ("E0003", msg),
            AppError::Conflict(msg) => ("E0004", msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                ("E9002", "Database error".to_string())
            }
        };

        let body = Json(ErrorBody {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(target: "validation", reason = %rejection.body_text(), "Unreadable request body");
        AppError::Validation(ValidationErrors::invalid_input())
    }
}

/// A path id that is not an integer names no row
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        warn!(target: "validation", reason = %rejection.body_text(), "Unparsable path id");
        AppError::NotFound("Resource not found".to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) | RepoError::ForeignKey(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
