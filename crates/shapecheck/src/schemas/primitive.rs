//! Primitive schemas - leaf validators for base kinds.
//!
//! Each primitive accepts a value iff its runtime kind exactly matches the
//! expected kind, with the most permissive native notion of that kind: any
//! numeric value is a `number` (no range or format restriction), any text
//! is a `string`, `true`/`false` is a `boolean`. On mismatch the failure
//! message states the expected kind and the observed kind, in that order:
//! `Invalid primitive. Expected number, but got string`. That exact
//! wording is relied on by the composing combinators.

use serde_json::Value;

use crate::foundation::{Schema, ValidationError, ValidationResult, ValueKind};

// ============================================================================
// NUMBER
// ============================================================================

/// Accepts any numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = number();
/// assert!(schema.is_valid(Some(&json!(0))));
/// assert!(schema.is_valid(Some(&json!(-2.75))));
/// assert!(!schema.is_valid(Some(&json!("3"))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberSchema;

impl Schema for NumberSchema {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match input {
            Some(Value::Number(_)) => Ok(input),
            other => Err(ValidationError::invalid_primitive(
                ValueKind::Number,
                ValueKind::of(other),
            )),
        }
    }
}

/// Creates a schema that accepts any numeric value.
#[must_use]
pub fn number() -> NumberSchema {
    NumberSchema
}

// ============================================================================
// STRING
// ============================================================================

/// Accepts any textual value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringSchema;

impl Schema for StringSchema {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match input {
            Some(Value::String(_)) => Ok(input),
            other => Err(ValidationError::invalid_primitive(
                ValueKind::String,
                ValueKind::of(other),
            )),
        }
    }
}

/// Creates a schema that accepts any textual value.
#[must_use]
pub fn string() -> StringSchema {
    StringSchema
}

// ============================================================================
// BOOLEAN
// ============================================================================

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanSchema;

impl Schema for BooleanSchema {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match input {
            Some(Value::Bool(_)) => Ok(input),
            other => Err(ValidationError::invalid_primitive(
                ValueKind::Boolean,
                ValueKind::of(other),
            )),
        }
    }
}

/// Creates a schema that accepts `true` and `false`.
#[must_use]
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn number_accepts_any_numeric_value() {
        let schema = number();
        for value in [json!(0), json!(-1), json!(1.5), json!(1e300), json!(u64::MAX)] {
            assert_eq!(schema.validate(Some(&value)), Ok(Some(&value)));
        }
    }

    #[test]
    fn number_rejects_other_kinds_with_observed_kind() {
        let err = number().validate(Some(&json!("3"))).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid primitive. Expected number, but got string"
        );
        let err = number().validate(Some(&json!(null))).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid primitive. Expected number, but got null"
        );
    }

    #[test]
    fn string_round_trips_and_rejects() {
        let value = json!("hello");
        assert_eq!(string().validate(Some(&value)), Ok(Some(&value)));
        let err = string().validate(Some(&json!(true))).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid primitive. Expected string, but got boolean"
        );
    }

    #[test]
    fn boolean_round_trips_and_rejects() {
        let value = json!(false);
        assert_eq!(boolean().validate(Some(&value)), Ok(Some(&value)));
        let err = boolean().validate(Some(&json!([]))).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid primitive. Expected boolean, but got array"
        );
    }

    #[test]
    fn absent_values_are_reported_as_nothing() {
        let err = string().validate(None).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid primitive. Expected string, but got nothing"
        );
    }
}
