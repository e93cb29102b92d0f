//! Error types for the record store and the request boundary
//!
//! Boundary failures are reported field by field so a single response can
//! list every violation of a payload.

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

use crate::user::UserId;

/// Record store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },
}

/// One segment of a [`FieldError`] location: a field name or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Loc {
    Field(String),
    Index(usize),
}

impl From<&str> for Loc {
    fn from(field: &str) -> Self {
        Loc::Field(field.to_string())
    }
}

impl From<String> for Loc {
    fn from(field: String) -> Self {
        Loc::Field(field)
    }
}

impl From<usize> for Loc {
    fn from(index: usize) -> Self {
        Loc::Index(index)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loc::Field(name) => write!(f, "{}", name),
            Loc::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A single boundary validation failure
///
/// Serializes as `{"loc": [...], "msg": "...", "type": "...", "ctx": {...}}`,
/// with `ctx` omitted when there is no violated limit to report.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{}: {msg}", join_loc(.loc))]
pub struct FieldError {
    pub loc: Vec<Loc>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    pub fn new(field: impl Into<Loc>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec![field.into()],
            msg: msg.into(),
            kind: kind.into(),
            ctx: None,
        }
    }

    /// Required field absent from the input
    pub fn missing(field: impl Into<Loc>) -> Self {
        Self::new(field, "field required", "value_error.missing")
    }

    /// String longer than `limit` characters
    pub fn max_length(field: impl Into<Loc>, limit: usize) -> Self {
        Self::new(
            field,
            format!("ensure this value has at most {} characters", limit),
            "value_error.any_str.max_length",
        )
        .with_ctx(json!({ "limit_value": limit }))
    }

    /// String shorter than `limit` characters
    pub fn min_length(field: impl Into<Loc>, limit: usize) -> Self {
        Self::new(
            field,
            format!("ensure this value has at least {} characters", limit),
            "value_error.any_str.min_length",
        )
        .with_ctx(json!({ "limit_value": limit }))
    }

    /// Number below the inclusive lower bound `limit`
    pub fn not_ge(field: impl Into<Loc>, limit: f64) -> Self {
        Self::new(
            field,
            format!("ensure this value is greater than or equal to {}", limit),
            "value_error.number.not_ge",
        )
        .with_ctx(json!({ "limit_value": limit }))
    }

    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Prepend a segment to the location, e.g. the request part or the
    /// index of the element inside a sequence.
    pub fn prefixed(mut self, segment: impl Into<Loc>) -> Self {
        self.loc.insert(0, segment.into());
        self
    }
}

fn join_loc(loc: &[Loc]) -> String {
    loc.iter()
        .map(Loc::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::UserNotFound { user_id: 999 };
        assert_eq!(err.to_string(), "User not found: 999");
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::not_ge("amount", 0.0).prefixed(0).prefixed("body");
        assert_eq!(
            err.to_string(),
            "body.0.amount: ensure this value is greater than or equal to 0"
        );
    }

    #[test]
    fn test_field_error_serialization() {
        let err = FieldError::max_length("currency", 5).prefixed(2);
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["loc"], json!([2, "currency"]));
        assert_eq!(value["type"], "value_error.any_str.max_length");
        assert_eq!(value["ctx"]["limit_value"], 5);
    }

    #[test]
    fn test_missing_field_has_no_ctx() {
        let value = serde_json::to_value(FieldError::missing("new_name")).unwrap();
        assert_eq!(value["msg"], "field required");
        assert!(value.get("ctx").is_none());
    }
}
