//! Member Repository

use super::{RepoError, RepoResult};
use shared::models::{Member, MemberPayload};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let rows = sqlx::query_as::<_, Member>("SELECT id, name, age FROM member ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let row = sqlx::query_as::<_, Member>("SELECT id, name, age FROM member WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM member WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Insert with the caller's id; an existing id fails as `Duplicate`
pub async fn create(pool: &SqlitePool, data: &MemberPayload) -> RepoResult<()> {
    sqlx::query("INSERT INTO member (id, name, age) VALUES (?1, ?2, ?3)")
        .bind(data.id)
        .bind(&data.name)
        .bind(data.stored_age())
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e).on_duplicate(|| format!("Member {} already exists", data.id))
        })?;
    Ok(())
}

/// Full replace of id/name/age on the row currently keyed by `id`
pub async fn update(pool: &SqlitePool, id: i64, data: &MemberPayload) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE member SET id = ?1, name = ?2, age = ?3 WHERE id = ?4")
        .bind(data.id)
        .bind(&data.name)
        .bind(data.stored_age())
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e)
                .on_duplicate(|| format!("Member {} already exists", data.id))
                .on_foreign_key(|| {
                    format!("Member {id} has workout sessions; its id cannot change")
                })
        })?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {id} not found")));
    }
    Ok(())
}

/// Remove the row; sessions are not cascaded, so a referenced member fails as `ForeignKey`
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e)
                .on_foreign_key(|| format!("Member {id} has workout sessions and cannot be deleted"))
        })?;
    Ok(rows.rows_affected() > 0)
}
