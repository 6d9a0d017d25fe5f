//! Prelude module for convenient imports.
//!
//! A single `use shapecheck::prelude::*;` brings in the schema trait, the
//! error and result types, and every built-in constructor and combinator.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck::prelude::*;
//!
//! let user = object()
//!     .field("name", string())
//!     .field("age", optional(number()));
//!
//! assert!(user.is_valid(Some(&json!({ "name": "ada" }))));
//! ```

// ============================================================================
// FOUNDATION: trait, result model, errors, kinds
// ============================================================================

pub use crate::foundation::{Schema, SchemaExt, ValidationError, ValidationResult, ValueKind};

// ============================================================================
// SCHEMAS: primitive and structural constructors
// ============================================================================

pub use crate::schemas::{
    ArraySchema, BooleanSchema, NumberSchema, ObjectSchema, StringSchema, TupleSchema, array,
    boolean, number, object, string, tuple,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Optional, Or, and, optional, or};
