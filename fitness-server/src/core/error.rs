//! Server lifecycle errors

use thiserror::Error;

use crate::utils::AppError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to initialize state: {0}")]
    Init(#[from] AppError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
