//! The validation error type and its message contract.
//!
//! Every failed validation produces exactly one [`ValidationError`]. The
//! error is a single human-readable message; nesting is expressed by
//! composition of messages, not by a tree of error values. The wrapping
//! rule applied by `object` — `Got invalid type for field '<name>':
//! '<child message>'` — nests arbitrarily, so one string carries the full
//! path from the root of the schema tree to the offending value.
//!
//! The message formats produced by the constructors below are a contract:
//! combinators compose them verbatim, and callers are entitled to match on
//! them. Do not reword them without treating it as a breaking change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::ValueKind;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```rust
/// use shapecheck::foundation::{ValidationError, ValueKind};
///
/// let error = ValidationError::invalid_primitive(ValueKind::Number, ValueKind::String);
/// assert_eq!(
///     error.to_string(),
///     "Invalid primitive. Expected number, but got string",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates an error with an arbitrary message.
    ///
    /// Intended for schemas defined outside this crate; the built-in
    /// schemas only use the contract constructors below.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A primitive schema rejected the value.
    ///
    /// Format: `Invalid primitive. Expected <expected>, but got <actual>`.
    #[must_use]
    pub fn invalid_primitive(expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(format!(
            "Invalid primitive. Expected {expected}, but got {actual}"
        ))
    }

    /// A structural schema rejected the value's kind outright.
    ///
    /// `expected` is the structural shape name (`object`, `array`,
    /// `tuple`). Format: `Invalid type. Expected <expected>, but got
    /// <actual>`.
    #[must_use]
    pub fn invalid_type(expected: &str, actual: ValueKind) -> Self {
        Self::new(format!("Invalid type. Expected {expected}, but got {actual}"))
    }

    /// A tuple input had the wrong number of elements.
    ///
    /// Format: `Invalid tuple length. Expected <expected>, but got
    /// <actual>`.
    #[must_use]
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::new(format!(
            "Invalid tuple length. Expected {expected}, but got {actual}"
        ))
    }

    /// An object field failed its child schema.
    ///
    /// This is the wrapping rule behind path-annotated messages. Format:
    /// `Got invalid type for field '<name>': '<cause>'`.
    #[must_use]
    pub fn invalid_field(name: &str, cause: &Self) -> Self {
        Self::new(format!("Got invalid type for field '{name}': '{cause}'"))
    }

    /// Both branches of an `or` rejected the value.
    ///
    /// Format: `Failed or case. Left: <left>, Right: <right>`.
    #[must_use]
    pub fn or_case(left: &Self, right: &Self) -> Self {
        Self::new(format!("Failed or case. Left: {left}, Right: {right}"))
    }

    /// At least one side of an `and` rejected the value.
    ///
    /// `failures` holds only the sides that failed, in left-then-right
    /// order; a side that succeeded contributes nothing. Format: `Failed
    /// and case. <messages, comma separated>`.
    #[must_use]
    pub fn and_case(failures: &[Self]) -> Self {
        debug_assert!(!failures.is_empty());
        let joined = failures
            .iter()
            .map(Self::message)
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(format!("Failed and case. {joined}"))
    }

    /// The full, path-annotated message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn primitive_message_format() {
        let error = ValidationError::invalid_primitive(ValueKind::Boolean, ValueKind::Null);
        assert_eq!(
            error.message(),
            "Invalid primitive. Expected boolean, but got null"
        );
    }

    #[test]
    fn structural_message_format() {
        let error = ValidationError::invalid_type("tuple", ValueKind::Object);
        assert_eq!(error.message(), "Invalid type. Expected tuple, but got object");
    }

    #[test]
    fn length_message_format() {
        let error = ValidationError::invalid_length(2, 3);
        assert_eq!(error.message(), "Invalid tuple length. Expected 2, but got 3");
    }

    #[test]
    fn field_wrapping_nests() {
        let leaf = ValidationError::invalid_primitive(ValueKind::Number, ValueKind::String);
        let inner = ValidationError::invalid_field("bar", &leaf);
        let outer = ValidationError::invalid_field("foo", &inner);
        assert_eq!(
            outer.message(),
            "Got invalid type for field 'foo': 'Got invalid type for field 'bar': \
             'Invalid primitive. Expected number, but got string''"
        );
    }

    #[test]
    fn or_message_format() {
        let left = ValidationError::new("left failed");
        let right = ValidationError::new("right failed");
        assert_eq!(
            ValidationError::or_case(&left, &right).message(),
            "Failed or case. Left: left failed, Right: right failed"
        );
    }

    #[test]
    fn and_message_lists_only_failures_given() {
        let one = ValidationError::new("first");
        assert_eq!(
            ValidationError::and_case(std::slice::from_ref(&one)).message(),
            "Failed and case. first"
        );
        let two = ValidationError::new("second");
        assert_eq!(
            ValidationError::and_case(&[one, two]).message(),
            "Failed and case. first, second"
        );
    }

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::new("anything");
        assert_eq!(error.to_string(), error.message());
    }
}
