//! Macros for building schema trees with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`object_schema!`](crate::object_schema) — declare an object schema's
//!   fields as `name => schema` pairs
//! - [`tuple_schema!`](crate::tuple_schema) — declare a tuple schema as a
//!   comma-separated position list
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck::prelude::*;
//! use shapecheck::{object_schema, tuple_schema};
//!
//! let schema = object_schema! {
//!     "name" => string(),
//!     "pos" => tuple_schema![number(), number()],
//!     "tags" => optional(array(string())),
//! };
//!
//! let input = json!({ "name": "probe", "pos": [4, -2] });
//! assert!(schema.is_valid(Some(&input)));
//! ```

// ============================================================================
// OBJECT SCHEMA MACRO
// ============================================================================

/// Builds an [`ObjectSchema`](crate::schemas::ObjectSchema) from
/// `name => schema` pairs.
///
/// Fields are declared — and therefore validated — in the order written.
/// Expands to `object().field(...)` calls, so it accepts exactly what
/// [`ObjectSchema::field`](crate::schemas::ObjectSchema::field) accepts.
#[macro_export]
macro_rules! object_schema {
    ($($name:expr => $schema:expr),* $(,)?) => {
        $crate::schemas::object()$(.field($name, $schema))*
    };
}

// ============================================================================
// TUPLE SCHEMA MACRO
// ============================================================================

/// Builds a [`TupleSchema`](crate::schemas::TupleSchema) from a position
/// list. At least one position is required.
#[macro_export]
macro_rules! tuple_schema {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::schemas::tuple($first)$(.item($rest))*
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::foundation::Schema;
    use crate::schemas::{boolean, number, object, string, tuple};

    #[test]
    fn object_macro_matches_builder_form() {
        let by_macro = object_schema! {
            "a" => number(),
            "b" => string(),
        };
        let by_builder = object().field("a", number()).field("b", string());
        let good = json!({ "a": 1, "b": "x" });
        let bad = json!({ "a": "1", "b": "x" });
        assert!(by_macro.is_valid(Some(&good)) && by_builder.is_valid(Some(&good)));
        assert_eq!(
            by_macro.validate(Some(&bad)).unwrap_err(),
            by_builder.validate(Some(&bad)).unwrap_err(),
        );
    }

    #[test]
    fn tuple_macro_matches_builder_form() {
        let by_macro = tuple_schema![number(), string(), boolean()];
        let by_builder = tuple(number()).item(string()).item(boolean());
        let good = json!([1, "x", true]);
        let bad = json!([1, "x"]);
        assert!(by_macro.is_valid(Some(&good)) && by_builder.is_valid(Some(&good)));
        assert_eq!(
            by_macro.validate(Some(&bad)).unwrap_err(),
            by_builder.validate(Some(&bad)).unwrap_err(),
        );
    }

    #[test]
    fn empty_object_macro_is_the_empty_schema() {
        let schema = object_schema! {};
        assert!(schema.is_valid(Some(&json!({ "anything": 1 }))));
    }

    #[test]
    fn macros_allow_trailing_commas() {
        let schema = object_schema! { "only" => tuple_schema![number(),], };
        assert!(schema.is_valid(Some(&json!({ "only": [5] }))));
    }
}
