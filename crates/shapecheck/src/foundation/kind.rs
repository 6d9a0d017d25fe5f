//! Runtime classification of untyped values.
//!
//! Schemas never inspect a value through language reflection; every kind
//! check goes through [`ValueKind`], an explicit tagged view of the
//! `serde_json::Value` union. `ValueKind::Nothing` classifies an absent
//! value — a missing object field — which has no `Value` representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The runtime kind of a value as seen by a schema.
///
/// The `Display` form of each variant is the spelling used in error
/// messages, so it is part of the message contract.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::foundation::ValueKind;
///
/// assert_eq!(ValueKind::of(Some(&json!(1))), ValueKind::Number);
/// assert_eq!(ValueKind::of(Some(&json!(null))), ValueKind::Null);
/// assert_eq!(ValueKind::of(None), ValueKind::Nothing);
/// assert_eq!(ValueKind::Boolean.to_string(), "boolean");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// An absent value, such as a missing object field.
    Nothing,
    /// The JSON `null` value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any numeric value; no range or format restriction.
    Number,
    /// A textual value.
    String,
    /// A sequence of values.
    Array,
    /// A record of named fields.
    Object,
}

impl ValueKind {
    /// Classifies a possibly absent value.
    #[must_use]
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Nothing,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// The error-message spelling of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_every_variant() {
        assert_eq!(ValueKind::of(None), ValueKind::Nothing);
        assert_eq!(ValueKind::of(Some(&json!(null))), ValueKind::Null);
        assert_eq!(ValueKind::of(Some(&json!(true))), ValueKind::Boolean);
        assert_eq!(ValueKind::of(Some(&json!(-3.5))), ValueKind::Number);
        assert_eq!(ValueKind::of(Some(&json!("x"))), ValueKind::String);
        assert_eq!(ValueKind::of(Some(&json!([1, 2]))), ValueKind::Array);
        assert_eq!(ValueKind::of(Some(&json!({"a": 1}))), ValueKind::Object);
    }

    #[test]
    fn display_matches_message_contract() {
        assert_eq!(ValueKind::Nothing.to_string(), "nothing");
        assert_eq!(ValueKind::Null.to_string(), "null");
        assert_eq!(ValueKind::Boolean.to_string(), "boolean");
        assert_eq!(ValueKind::Number.to_string(), "number");
        assert_eq!(ValueKind::String.to_string(), "string");
        assert_eq!(ValueKind::Array.to_string(), "array");
        assert_eq!(ValueKind::Object.to_string(), "object");
    }
}
