//! TUPLE schema - validates fixed-length heterogeneous sequences.
//!
//! A tuple schema declares one child schema per position. The input must
//! be a sequence of exactly that length; each position is validated
//! against its own schema in ascending order, stopping at the first
//! mismatch. Like `array`, the failing position's error is propagated
//! verbatim, with no positional context added.

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Schema, ValidationError, ValidationResult, ValueKind};

// ============================================================================
// TUPLE SCHEMA
// ============================================================================

/// Validates a fixed-length sequence, one schema per position.
///
/// Construction starts from the first position, so a tuple schema always
/// has at least one element; further positions are appended with
/// [`TupleSchema::item`].
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let pair = tuple(number()).item(string());
/// assert!(pair.is_valid(Some(&json!([1, "one"]))));
/// assert!(!pair.is_valid(Some(&json!([1]))));
/// assert!(!pair.is_valid(Some(&json!([1, "one", true]))));
/// ```
#[derive(Debug, Clone)]
pub struct TupleSchema {
    items: Vec<Arc<dyn Schema>>,
}

impl TupleSchema {
    /// Creates a tuple schema with a single position.
    #[must_use]
    pub fn new(first: impl Schema + 'static) -> Self {
        Self {
            items: vec![Arc::new(first)],
        }
    }

    /// Appends a position to the tuple.
    #[must_use]
    pub fn item(mut self, schema: impl Schema + 'static) -> Self {
        self.items.push(Arc::new(schema));
        self
    }

    /// The declared arity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: a tuple schema has at least one position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Schema for TupleSchema {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        let Some(Value::Array(items)) = input else {
            return Err(ValidationError::invalid_type("tuple", ValueKind::of(input)));
        };
        if items.len() != self.items.len() {
            return Err(ValidationError::invalid_length(self.items.len(), items.len()));
        }
        for (schema, item) in self.items.iter().zip(items) {
            schema.validate(Some(item))?;
        }
        Ok(input)
    }
}

/// Creates a tuple schema whose first position accepts `first`-shaped
/// values.
///
/// For tuples with many positions, [`tuple_schema!`](crate::tuple_schema)
/// reads better than a chain of [`item`](TupleSchema::item) calls.
#[must_use]
pub fn tuple(first: impl Schema + 'static) -> TupleSchema {
    TupleSchema::new(first)
}

// ============================================================================
// TESTS
// ============================================================================
