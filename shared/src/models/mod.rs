//! Data models
//!
//! Each entity has three shapes:
//! - the storage row (`Member`, `WorkoutSession`)
//! - the validated request payload (`*Payload`)
//! - the response projection (`*View`)

pub mod member;
pub mod workout_session;

pub use member::{Member, MemberPayload, MemberView};
pub use workout_session::{WorkoutPayload, WorkoutSession, WorkoutView};
