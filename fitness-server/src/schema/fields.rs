//! Typed field extraction over a raw JSON body
//!
//! Every accessor records its own failure in the shared error map and
//! returns `None`, so one pass reports every bad field at once.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::errors::ValidationErrors;

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const UNKNOWN: &str = "Unknown field.";
pub const NOT_INTEGER: &str = "Not a valid integer.";
pub const NOT_STRING: &str = "Not a valid string.";
pub const NOT_DATE: &str = "Not a valid date.";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> Fields<'a> {
    /// Open `raw` for reading; keys outside `declared` are reported as unknown.
    pub fn open(raw: &'a Value, declared: &[&str]) -> Result<Self, ValidationErrors> {
        let object = raw.as_object().ok_or_else(ValidationErrors::invalid_input)?;

        let mut errors = ValidationErrors::new();
        for key in object.keys() {
            if !declared.contains(&key.as_str()) {
                errors.add(key.as_str(), UNKNOWN);
            }
        }

        Ok(Self { object, errors })
    }

    pub fn required_int(&mut self, name: &str) -> Option<i64> {
        let value = self.required(name)?;
        self.int(name, value)
    }

    pub fn optional_int(&mut self, name: &str) -> Option<i64> {
        let value = self.optional(name)?;
        self.int(name, value)
    }

    /// Optional integer that must fit a 32-bit column
    pub fn optional_i32(&mut self, name: &str) -> Option<i32> {
        let value = self.optional_int(name)?;
        match i32::try_from(value) {
            Ok(v) => Some(v),
            Err(_) => {
                self.errors.add(name, NOT_INTEGER);
                None
            }
        }
    }

    pub fn required_string(&mut self, name: &str) -> Option<String> {
        let value = self.required(name)?;
        self.string(name, value)
    }

    pub fn optional_string(&mut self, name: &str) -> Option<String> {
        let value = self.optional(name)?;
        self.string(name, value)
    }

    pub fn optional_date(&mut self, name: &str) -> Option<NaiveDate> {
        let value = self.optional(name)?;
        let parsed = value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());
        if parsed.is_none() {
            self.errors.add(name, NOT_DATE);
        }
        parsed
    }

    /// Whether no field has failed so far
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn required(&mut self, name: &str) -> Option<&'a Value> {
        match self.object.get(name) {
            None => {
                self.errors.add(name, MISSING);
                None
            }
            Some(value) => self.non_null(name, value),
        }
    }

    fn optional(&mut self, name: &str) -> Option<&'a Value> {
        let value = self.object.get(name)?;
        self.non_null(name, value)
    }

    fn non_null(&mut self, name: &str, value: &'a Value) -> Option<&'a Value> {
        if value.is_null() {
            self.errors.add(name, NULL);
            return None;
        }
        Some(value)
    }

    fn int(&mut self, name: &str, value: &Value) -> Option<i64> {
        let parsed = as_integer(value);
        if parsed.is_none() {
            self.errors.add(name, NOT_INTEGER);
        }
        parsed
    }

    fn string(&mut self, name: &str, value: &Value) -> Option<String> {
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.errors.add(name, NOT_STRING);
                None
            }
        }
    }
}

/// Integral JSON numbers and numeric strings; booleans are rejected.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
