//! ARRAY schema - validates homogeneous sequences.
//!
//! Every element of the input sequence must satisfy the same element
//! schema. Validation walks the elements in index order and stops at the
//! first rejection. The element's error is propagated verbatim — no index
//! context is added. That asymmetry with `object`'s field wrapping is
//! deliberate: callers match on the composed message formats, and
//! extending them with positional context would be a breaking change.

use serde_json::Value;

use crate::foundation::{Schema, ValidationError, ValidationResult, ValueKind};

// ============================================================================
// ARRAY SCHEMA
// ============================================================================

/// Validates a sequence whose elements all satisfy one schema.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = array(number());
/// assert!(schema.is_valid(Some(&json!([1, 2, 3]))));
/// assert!(schema.is_valid(Some(&json!([]))));
/// assert!(!schema.is_valid(Some(&json!([1, "2"]))));
/// assert!(!schema.is_valid(Some(&json!({"0": 1}))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArraySchema<S> {
    element: S,
}

impl<S> ArraySchema<S> {
    /// Creates an array schema from an element schema.
    pub fn new(element: S) -> Self {
        Self { element }
    }

    /// Returns a reference to the element schema.
    pub fn element(&self) -> &S {
        &self.element
    }

    /// Extracts the element schema.
    pub fn into_inner(self) -> S {
        self.element
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match input {
            Some(Value::Array(items)) => {
                for item in items {
                    self.element.validate(Some(item))?;
                }
                Ok(input)
            }
            other => Err(ValidationError::invalid_type("array", ValueKind::of(other))),
        }
    }
}

/// Creates a schema that accepts sequences of `element`-shaped values.
#[must_use]
pub fn array<S: Schema>(element: S) -> ArraySchema<S> {
    ArraySchema::new(element)
}

// ============================================================================
// TESTS
// ============================================================================
