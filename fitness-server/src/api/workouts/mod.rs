//! Workout session API module
//!
//! Sessions can be scheduled, replaced and listed; there is no delete route.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/workouts", get(handler::list).post(handler::create))
        .route("/workouts/{id}", put(handler::update))
        .route(
            "/workouts/member_sessions/{id}",
            get(handler::list_by_member),
        )
}
