//! Workout Session Repository

use super::{RepoError, RepoResult};
use shared::models::{WorkoutPayload, WorkoutSession};
use sqlx::SqlitePool;

const SESSION_SELECT: &str = "SELECT session_id, member_id, session_date, duration_minutes, activity, calories_burned FROM workout_session";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<WorkoutSession>> {
    let sql = format!("{SESSION_SELECT} ORDER BY session_id");
    let rows = sqlx::query_as::<_, WorkoutSession>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, session_id: i64) -> RepoResult<Option<WorkoutSession>> {
    let sql = format!("{SESSION_SELECT} WHERE session_id = ?");
    let row = sqlx::query_as::<_, WorkoutSession>(&sql)
        .bind(session_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Every session owned by `member_id`
pub async fn find_by_member(pool: &SqlitePool, member_id: i64) -> RepoResult<Vec<WorkoutSession>> {
    let sql = format!("{SESSION_SELECT} WHERE member_id = ? ORDER BY session_id");
    let rows = sqlx::query_as::<_, WorkoutSession>(&sql)
        .bind(member_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: &WorkoutPayload) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO workout_session (session_id, member_id, session_date, duration_minutes, activity, calories_burned) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(data.session_id)
    .bind(data.member_id)
    .bind(data.session_date)
    .bind(data.duration_minutes)
    .bind(&data.activity)
    .bind(data.calories_burned)
    .execute(pool)
    .await
    .map_err(|e| {
        RepoError::from(e)
            .on_duplicate(|| format!("Workout session {} already exists", data.session_id))
            .on_foreign_key(|| format!("Member {} does not exist", data.member_id))
    })?;
    Ok(())
}

/// Replace everything except `session_date`, which keeps its stored value
pub async fn update(pool: &SqlitePool, session_id: i64, data: &WorkoutPayload) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE workout_session SET session_id = ?1, member_id = ?2, duration_minutes = ?3, activity = ?4, calories_burned = ?5 WHERE session_id = ?6",
    )
    .bind(data.session_id)
    .bind(data.member_id)
    .bind(data.duration_minutes)
    .bind(&data.activity)
    .bind(data.calories_burned)
    .bind(session_id)
    .execute(pool)
    .await
    .map_err(|e| {
        RepoError::from(e)
            .on_duplicate(|| format!("Workout session {} already exists", data.session_id))
            .on_foreign_key(|| format!("Member {} does not exist", data.member_id))
    })?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Workout session {session_id} not found"
        )));
    }
    Ok(())
}
