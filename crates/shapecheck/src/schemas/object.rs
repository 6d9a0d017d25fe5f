//! OBJECT schema - validates records field by field.
//!
//! An object schema declares a set of named fields, each with its own
//! child schema. Validation checks the declared fields in declaration
//! order and stops at the first one whose child schema rejects its value,
//! wrapping the child error with the field name. Fields present on the
//! input but not declared on the schema are ignored: the schema is
//! structurally permissive, and the success payload is the original input
//! with those extra fields intact.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::foundation::{Schema, ValidationError, ValidationResult, ValueKind};

// ============================================================================
// OBJECT SCHEMA
// ============================================================================

/// Validates a record of named fields.
///
/// Built incrementally with [`ObjectSchema::field`]; fields are checked in
/// the order they were declared. A missing field is passed to its child
/// schema as an absent value, so a field is only required if its child
/// schema rejects absence — wrap the child in
/// [`optional`](crate::combinators::optional) to permit omission.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = object()
///     .field("title", string())
///     .field("stars", number());
///
/// assert!(schema.is_valid(Some(&json!({ "title": "m31", "stars": 1e12 }))));
/// assert!(!schema.is_valid(Some(&json!({ "title": "m31" }))));
/// assert!(!schema.is_valid(Some(&json!(null))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Arc<dyn Schema>)>,
}

impl ObjectSchema {
    /// Creates an object schema with no declared fields.
    ///
    /// With no fields declared, any record is accepted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field with its child schema.
    ///
    /// Re-declaring an existing name replaces that field's schema in
    /// place; it does not change the field's position in the validation
    /// order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: impl Schema + 'static) -> Self {
        let name = name.into();
        let schema: Arc<dyn Schema> = Arc::new(schema);
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// The declared fields, in validation order.
    #[must_use]
    pub fn fields(&self) -> &[(String, Arc<dyn Schema>)] {
        &self.fields
    }
}

impl Schema for ObjectSchema {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        let Some(Value::Object(entries)) = input else {
            return Err(ValidationError::invalid_type("object", ValueKind::of(input)));
        };
        for (name, schema) in &self.fields {
            // A missing key flows to the child as an absent value; only
            // the child decides whether absence is acceptable.
            if let Err(cause) = schema.validate(entries.get(name)) {
                trace!(field = %name, %cause, "object field rejected");
                return Err(ValidationError::invalid_field(name, &cause));
            }
        }
        Ok(input)
    }
}

/// Creates an object schema with no declared fields.
///
/// # Examples
///
/// ```rust
/// use shapecheck::prelude::*;
///
/// let schema = object().field("id", number());
/// ```
#[must_use]
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

// ============================================================================
// TESTS
// ============================================================================
