//! # shapecheck
//!
//! A composable runtime schema-validation engine. A schema is an
//! immutable, declarative description of an expected shape — primitives,
//! objects, arrays, tuples, optional fields, unions, intersections —
//! checked against an arbitrary `serde_json::Value`. The result is either
//! the validated value or a single, path-annotated error describing the
//! first violation found.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck::prelude::*;
//!
//! let schema = object()
//!     .field("name", string())
//!     .field("id", string().or(number()))
//!     .field("tags", optional(array(string())));
//!
//! let input = json!({ "name": "ada", "id": 7 });
//! assert!(schema.validate(Some(&input)).is_ok());
//!
//! let bad = json!({ "name": 1, "id": 7 });
//! let error = schema.validate(Some(&bad)).unwrap_err();
//! assert_eq!(
//!     error.message(),
//!     "Got invalid type for field 'name': \
//!      'Invalid primitive. Expected string, but got number'",
//! );
//! ```
//!
//! ## Design
//!
//! - Schemas are built once, bottom-up, and reused across many
//!   [`validate`](foundation::Schema::validate) calls; they are never
//!   mutated after construction and are safe to share across threads.
//! - Validation recurses depth-first, short-circuiting on the first
//!   failure; `object` wraps child errors with the failing field name, so
//!   one message carries the full path to the offending value. `and`
//!   always runs both sides to report every violated one.
//! - Validation never coerces: the success payload is the original input,
//!   extra object fields included.
//! - Errors are data, never panics.
//!
//! ## Typed extraction
//!
//! Each schema constructor maps structurally to the Rust type of the
//! values it accepts:
//!
//! | schema | accepted type |
//! |---|---|
//! | `number()` | `f64` |
//! | `string()` | `String` |
//! | `boolean()` | `bool` |
//! | `optional(s)` | `Option<T>` |
//! | `array(s)` | `Vec<T>` |
//! | `tuple(s1, ..., sn)` | `(T1, ..., Tn)` |
//! | `object().field(...)` | a struct with matching `Deserialize` fields |
//! | `or(l, r)` | an untagged enum of the two types |
//! | `and(l, r)` | any type satisfying both rows |
//!
//! The runtime engine does not perform this mapping; it is a contract the
//! crate's tests enforce: a value accepted by a schema deserializes
//! infallibly into the mapped type via `serde`, so validated values can
//! be consumed with full structural typing and no further checks.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schemas;

pub use foundation::{Schema, SchemaExt, ValidationError, ValidationResult, ValueKind};
