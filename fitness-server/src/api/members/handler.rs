//! Member API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde_json::Value;
use shared::models::MemberView;

use crate::api::{Created, created};
use crate::core::ServerState;
use crate::db::repository::member;
use crate::schema::{MemberSchema, Schema};
use crate::utils::{AppError, AppResult};

/// GET /members - every member, ordered by id
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MemberView>>> {
    let members = member::find_all(state.pool()).await?;
    Ok(Json(MemberSchema::dump_many(&members)))
}

/// POST /members - insert with the caller-supplied id
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Created> {
    let Json(raw) = payload?;
    let data = MemberSchema::load(&raw)?;

    member::create(state.pool(), &data).await?;
    tracing::info!(member_id = data.id, "Member created");

    Ok(created("New member added successfully"))
}

/// PUT /members/{id} - full replace, including the id itself
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Created> {
    let Path(id) = path?;
    ensure_exists(&state, id).await?;

    let Json(raw) = payload?;
    let data = MemberSchema::load(&raw)?;

    member::update(state.pool(), id, &data).await?;
    tracing::info!(member_id = id, new_id = data.id, "Member updated");

    Ok(created("Member updated successfully"))
}

/// DELETE /members/{id} - sessions are not cascaded
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Created> {
    let Path(id) = path?;
    ensure_exists(&state, id).await?;

    if !member::delete(state.pool(), id).await? {
        return Err(AppError::not_found(format!("Member {id}")));
    }
    tracing::info!(member_id = id, "Member deleted");

    Ok(created("Member deleted successfully"))
}

async fn ensure_exists(state: &ServerState, id: i64) -> AppResult<()> {
    match member::find_by_id(state.pool(), id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::not_found(format!("Member {id}"))),
    }
}
