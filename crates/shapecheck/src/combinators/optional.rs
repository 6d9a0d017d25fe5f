//! OPTIONAL combinator - permits absence.
//!
//! Wraps a schema so that absent values and `null` are accepted
//! unconditionally. Anything else is delegated to the inner schema and
//! its result passes through unchanged; `optional` never produces a
//! failure message of its own.

use serde_json::Value;

use crate::foundation::{Schema, ValidationResult};

// ============================================================================
// OPTIONAL COMBINATOR
// ============================================================================

/// Accepts absence and `null` in addition to the inner schema's shape.
///
/// The success payload is the absent or `null` value itself; no coercion
/// takes place. The usual place for this combinator is an object field
/// that may be omitted.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = optional(string());
/// assert!(schema.is_valid(None));
/// assert!(schema.is_valid(Some(&json!(null))));
/// assert!(schema.is_valid(Some(&json!("x"))));
/// assert!(!schema.is_valid(Some(&json!(1))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner schema.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Extracts the inner schema.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Schema> Schema for Optional<S> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match input {
            None | Some(Value::Null) => Ok(input),
            present => self.inner.validate(present),
        }
    }
}

/// Creates a schema that also accepts absent values and `null`.
#[must_use]
pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
