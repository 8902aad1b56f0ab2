//! Member Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Age bounds imposed by the 8-character `age` column
pub const MIN_AGE: i64 = -9_999_999;
pub const MAX_AGE: i64 = 99_999_999;

/// Member entity (fitness-center client)
///
/// `age` is kept as text in storage; it only ever holds the decimal
/// rendering of a validated integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: Option<String>,
}

/// Validated create/replace payload
///
/// `id` is caller-controlled; a replace may move the member to a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MemberPayload {
    pub id: i64,
    #[validate(length(max = 255, message = "Longer than maximum length 255."))]
    pub name: String,
    #[validate(range(
        min = -9_999_999,
        max = 99_999_999,
        message = "Must be greater than or equal to -9999999 and less than or equal to 99999999."
    ))]
    pub age: Option<i64>,
}

impl MemberPayload {
    /// Age as written to the `age` column
    pub fn stored_age(&self) -> Option<String> {
        self.age.map(|a| a.to_string())
    }
}

/// Member as returned by `GET /members`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberView {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
}
