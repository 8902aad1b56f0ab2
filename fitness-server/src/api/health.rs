//! Greeting and health check

use axum::{Json, Router, routing::get};

use crate::core::ServerState;

pub const GREETING: &str = "Welcome to the Fitness Center DB!!";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
}

/// GET / - plain-text greeting
pub async fn home() -> &'static str {
    GREETING
}

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "fitness-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
