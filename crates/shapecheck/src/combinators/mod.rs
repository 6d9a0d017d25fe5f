//! Logical and modifier combinators.
//!
//! Combinators build new schemas from existing ones without changing
//! their shape:
//!
//! - [`and`] — intersection; both sides must accept, both always run
//! - [`or`] — union; left branch first, both errors reported on failure
//! - [`optional`] — additionally accepts absence and `null`
//!
//! Each is available both as a free function and as a fluent method on
//! [`SchemaExt`](crate::foundation::SchemaExt).
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck::prelude::*;
//!
//! let schema = object()
//!     .field("id", string().or(number()))
//!     .field("note", optional(string()));
//!
//! assert!(schema.is_valid(Some(&json!({ "id": 7 }))));
//! assert!(schema.is_valid(Some(&json!({ "id": "a7", "note": "hi" }))));
//! assert!(!schema.is_valid(Some(&json!({ "id": true }))));
//! ```

pub mod and;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use optional::{Optional, optional};
pub use or::{Or, or};
