//! Workout session schema

use serde_json::Value;
use shared::models::{WorkoutPayload, WorkoutSession, WorkoutView};

use super::fields::Fields;
use super::{Schema, ValidationErrors};

/// `session_id` and `member_id` are required; every other field is optional.
///
/// A legacy `id` key is declared so older clients are not rejected, but its
/// value is never read.
pub struct WorkoutSchema;

impl Schema for WorkoutSchema {
    type Record = WorkoutSession;
    type Payload = WorkoutPayload;
    type View = WorkoutView;

    const FIELDS: &'static [&'static str] = &[
        "id",
        "session_id",
        "member_id",
        "session_date",
        "duration_minutes",
        "activity",
        "calories_burned",
    ];

    fn parse(raw: &Value) -> Result<WorkoutPayload, ValidationErrors> {
        let mut fields = Fields::open(raw, Self::FIELDS)?;

        let session_id = fields.required_int("session_id");
        let member_id = fields.required_int("member_id");
        let session_date = fields.optional_date("session_date");
        let duration_minutes = fields.optional_i32("duration_minutes");
        let activity = fields.optional_string("activity");
        let calories_burned = fields.optional_i32("calories_burned");

        match (session_id, member_id) {
            (Some(session_id), Some(member_id)) if fields.is_clean() => Ok(WorkoutPayload {
                session_id,
                member_id,
                session_date,
                duration_minutes,
                activity,
                calories_burned,
            }),
            _ => Err(fields.into_errors()),
        }
    }

    fn dump(session: &WorkoutSession) -> WorkoutView {
        WorkoutView {
            session_id: session.session_id,
            member_id: session.member_id,
            session_date: session.session_date,
            duration_minutes: session.duration_minutes,
            activity: session.activity.clone(),
            calories_burned: session.calories_burned,
        }
    }
}
