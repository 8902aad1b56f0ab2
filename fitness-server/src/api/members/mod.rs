//! Member API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/members", get(handler::list).post(handler::create))
        .route("/members/{id}", put(handler::update).delete(handler::delete))
}
