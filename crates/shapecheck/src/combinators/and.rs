//! AND combinator - intersection of two schemas.
//!
//! Both sides must accept the value. Unlike the structural schemas, `and`
//! does not short-circuit: both sides always run, so the composed
//! diagnostic can list every violated side, not just the first.

use serde_json::Value;
use tracing::trace;

use crate::foundation::{Schema, ValidationError, ValidationResult};

// ============================================================================
// AND COMBINATOR
// ============================================================================

/// Accepts a value iff both schemas accept it.
///
/// On failure the message lists the messages of the sides that actually
/// failed, in left-then-right order: `Failed and case. <m1>[, <m2>]`. A
/// side that succeeded contributes nothing. The success payload is the
/// original input.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = and(
///     object().field("foo", number()),
///     object().field("bar", number()),
/// );
/// assert!(schema.is_valid(Some(&json!({ "foo": 1, "bar": 2 }))));
/// assert!(!schema.is_valid(Some(&json!({ "foo": 1 }))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left schema.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right schema.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right schemas.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: Schema, R: Schema> Schema for And<L, R> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        // Both sides run regardless of either outcome, so the diagnostic
        // covers every violated side.
        let left = self.left.validate(input);
        let right = self.right.validate(input);
        let failures: Vec<ValidationError> = [left.err(), right.err()]
            .into_iter()
            .flatten()
            .collect();
        if failures.is_empty() {
            Ok(input)
        } else {
            trace!(sides = failures.len(), "and combinator rejected");
            Err(ValidationError::and_case(&failures))
        }
    }
}

/// Creates a schema accepting values both `left` and `right` accept.
#[must_use]
pub fn and<L: Schema, R: Schema>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::foundation::SchemaExt;
    use crate::schemas::{number, object};

    #[test]
    fn succeeds_only_when_both_sides_succeed() {
        let schema = and(
            object().field("foo", number()),
            object().field("bar", number()),
        );
        let value = json!({ "foo": 1, "bar": 2 });
        let result = schema.validate(Some(&value)).unwrap();
        assert!(std::ptr::eq(result.unwrap(), &value));
    }

    #[test]
    fn lists_only_the_failing_side() {
        let schema = and(
            object().field("foo", number()),
            object().field("bar", number()),
        );
        let err = schema.validate(Some(&json!({ "foo": 1 }))).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed and case. Got invalid type for field 'bar': \
             'Invalid primitive. Expected number, but got nothing'"
        );
        assert!(!err.message().contains("'foo'"));
    }

    #[test]
    fn lists_both_sides_left_then_right() {
        let schema = and(
            object().field("foo", number()),
            object().field("bar", number()),
        );
        let err = schema.validate(Some(&json!({}))).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed and case. \
             Got invalid type for field 'foo': 'Invalid primitive. Expected number, but got nothing', \
             Got invalid type for field 'bar': 'Invalid primitive. Expected number, but got nothing'"
        );
    }

    #[test]
    fn fluent_method_builds_the_same_schema() {
        let fluent = object()
            .field("foo", number())
            .and(object().field("bar", number()));
        let value = json!({ "foo": 1, "bar": 2 });
        assert!(fluent.is_valid(Some(&value)));
    }

    #[test]
    fn accessors_and_into_parts() {
        let schema = and(number(), number());
        let _ = (schema.left(), schema.right());
        let (l, r) = schema.into_parts();
        assert!(l.is_valid(Some(&json!(1))));
        assert!(r.is_valid(Some(&json!(2))));
    }
}
