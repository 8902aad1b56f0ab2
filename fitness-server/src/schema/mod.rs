//! Validation/serialization layer
//!
//! A schema converts between wire JSON and typed records:
//! - [`Schema::load`] - raw body → validated payload, or a field error map
//! - [`Schema::dump`] / [`Schema::dump_many`] - storage row → response projection
//!
//! Loading runs in two stages. [`fields::Fields`] checks presence and types
//! and collects one error per bad field; the resulting payload is then
//! passed through its `validator` constraints, and both error sources end
//! up in the same [`ValidationErrors`] map.

pub mod errors;
pub mod fields;
pub mod member;
pub mod workout;

pub use errors::ValidationErrors;
pub use member::MemberSchema;
pub use workout::WorkoutSchema;

use serde_json::Value;
use validator::Validate;

pub trait Schema {
    /// Storage row
    type Record;
    /// Validated request payload
    type Payload: Validate;
    /// Response projection
    type View;

    /// Field names accepted on input
    const FIELDS: &'static [&'static str];

    /// Presence and type checks only
    fn parse(raw: &Value) -> Result<Self::Payload, ValidationErrors>;

    fn dump(record: &Self::Record) -> Self::View;

    fn load(raw: &Value) -> Result<Self::Payload, ValidationErrors> {
        let payload = Self::parse(raw)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Order-preserving list projection
    fn dump_many(records: &[Self::Record]) -> Vec<Self::View> {
        records.iter().map(Self::dump).collect()
    }
}
