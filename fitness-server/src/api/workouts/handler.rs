//! Workout Session API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde_json::Value;
use shared::models::{WorkoutPayload, WorkoutView};

use crate::api::{Created, created};
use crate::core::ServerState;
use crate::db::repository::{member, workout_session};
use crate::schema::{Schema, ValidationErrors, WorkoutSchema};
use crate::utils::{AppError, AppResult};

/// GET /workouts - every session, ordered by session_id
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<WorkoutView>>> {
    let sessions = workout_session::find_all(state.pool()).await?;
    Ok(Json(WorkoutSchema::dump_many(&sessions)))
}

/// GET /workouts/member_sessions/{id} - all sessions of one member (possibly none)
pub async fn list_by_member(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<WorkoutView>>> {
    let Path(member_id) = path?;
    let sessions = workout_session::find_by_member(state.pool(), member_id).await?;
    tracing::debug!(member_id, count = sessions.len(), "Member sessions loaded");
    Ok(Json(WorkoutSchema::dump_many(&sessions)))
}

/// POST /workouts - schedule a session for an existing member
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Created> {
    let Json(raw) = payload?;
    let data = WorkoutSchema::load(&raw)?;
    ensure_member(&state, &data).await?;

    workout_session::create(state.pool(), &data).await?;
    tracing::info!(
        session_id = data.session_id,
        member_id = data.member_id,
        "Workout session created"
    );

    Ok(created("New workout session added successfully"))
}

/// PUT /workouts/{id} - replace a session; `session_date` is left as stored
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Created> {
    let Path(session_id) = path?;
    if workout_session::find_by_id(state.pool(), session_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(format!("Workout session {session_id}")));
    }

    let Json(raw) = payload?;
    let data = WorkoutSchema::load(&raw)?;
    ensure_member(&state, &data).await?;

    workout_session::update(state.pool(), session_id, &data).await?;
    tracing::info!(
        session_id,
        new_session_id = data.session_id,
        member_id = data.member_id,
        "Workout session updated"
    );

    Ok(created("Workout session updated successfully"))
}

/// Reject a payload whose `member_id` has no member row
async fn ensure_member(state: &ServerState, data: &WorkoutPayload) -> AppResult<()> {
    if member::exists(state.pool(), data.member_id).await? {
        return Ok(());
    }
    Err(ValidationErrors::single(
        "member_id",
        format!("Member {} does not exist.", data.member_id),
    )
    .into())
}
