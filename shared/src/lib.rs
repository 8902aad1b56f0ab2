//! Shared types for the fitness center API
//!
//! Row types, validated payloads and response projections used by the
//! server and by anything that talks to it over HTTP.

pub mod models;
pub mod response;

// Re-exports
pub use response::MessageResponse;
pub use serde::{Deserialize, Serialize};
