//! Workout Session Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Workout session entity (one logged exercise event of a member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WorkoutSession {
    pub session_id: i64,
    pub member_id: i64,
    pub session_date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub activity: Option<String>,
    pub calories_burned: Option<i32>,
}

/// Validated create/replace payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WorkoutPayload {
    pub session_id: i64,
    pub member_id: i64,
    pub session_date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    #[validate(length(max = 255, message = "Longer than maximum length 255."))]
    pub activity: Option<String>,
    pub calories_burned: Option<i32>,
}

/// Workout session as returned by the `/workouts` read endpoints
///
/// `session_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutView {
    pub session_id: i64,
    pub member_id: i64,
    pub session_date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub activity: Option<String>,
    pub calories_burned: Option<i32>,
}
