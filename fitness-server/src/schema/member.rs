//! Member schema

use serde_json::Value;
use shared::models::{Member, MemberPayload, MemberView};

use super::fields::Fields;
use super::{Schema, ValidationErrors};

/// `id` (integer, required), `name` (string, required), `age` (integer, optional)
pub struct MemberSchema;

impl Schema for MemberSchema {
    type Record = Member;
    type Payload = MemberPayload;
    type View = MemberView;

    const FIELDS: &'static [&'static str] = &["id", "name", "age"];

    fn parse(raw: &Value) -> Result<MemberPayload, ValidationErrors> {
        let mut fields = Fields::open(raw, Self::FIELDS)?;

        let id = fields.required_int("id");
        let name = fields.required_string("name");
        let age = fields.optional_int("age");

        match (id, name) {
            (Some(id), Some(name)) if fields.is_clean() => Ok(MemberPayload { id, name, age }),
            _ => Err(fields.into_errors()),
        }
    }

    fn dump(member: &Member) -> MemberView {
        MemberView {
            id: member.id,
            name: member.name.clone(),
            age: member.age.as_deref().and_then(|a| a.trim().parse().ok()),
        }
    }
}
