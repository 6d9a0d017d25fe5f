//! OR combinator - union of two schemas.
//!
//! At least one side must accept the value. The left branch is always
//! tried first; that ordering is part of the contract, because it fixes
//! which message appears first when both branches fail.

use serde_json::Value;
use tracing::trace;

use crate::foundation::{Schema, ValidationError, ValidationResult};

// ============================================================================
// OR COMBINATOR
// ============================================================================

/// Accepts a value iff at least one of two schemas accepts it.
///
/// Validation tries `left`, then `right`. Only if both reject does the
/// combinator fail, with a message carrying both branch errors:
/// `Failed or case. Left: <left>, Right: <right>`. The success payload is
/// the original input, not the accepting branch's payload — the contract
/// is "accepted by at least one side".
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = or(boolean(), number());
/// assert!(schema.is_valid(Some(&json!(true))));
/// assert!(schema.is_valid(Some(&json!(42))));
/// assert!(!schema.is_valid(Some(&json!("x"))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L: Schema, R: Schema> Schema for Or<L, R> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        match self.left.validate(input) {
            Ok(_) => Ok(input),
            Err(left) => match self.right.validate(input) {
                Ok(_) => Ok(input),
                Err(right) => {
                    trace!(%left, %right, "both or branches rejected");
                    Err(ValidationError::or_case(&left, &right))
                }
            },
        }
    }
}

/// Creates a schema accepting values either `left` or `right` accepts.
#[must_use]
pub fn or<L: Schema, R: Schema>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
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
    use crate::schemas::{boolean, number, string};

    #[test]
    fn left_branch_acceptance_returns_the_original_input() {
        let schema = or(boolean(), number());
        let value = json!(false);
        let result = schema.validate(Some(&value)).unwrap();
        assert!(std::ptr::eq(result.unwrap(), &value));
    }

    #[test]
    fn right_branch_is_tried_when_left_rejects() {
        let schema = or(boolean(), number());
        let value = json!(3.25);
        assert!(schema.is_valid(Some(&value)));
    }

    #[test]
    fn both_branch_errors_appear_left_then_right() {
        let schema = or(boolean(), number());
        let err = schema.validate(Some(&json!("x"))).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed or case. \
             Left: Invalid primitive. Expected boolean, but got string, \
             Right: Invalid primitive. Expected number, but got string"
        );
    }

    #[test]
    fn nests_as_a_branch_of_another_or() {
        let schema = or(boolean(), or(number(), string()));
        assert!(schema.is_valid(Some(&json!("text"))));
        let err = schema.validate(Some(&json!(null))).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed or case. \
             Left: Invalid primitive. Expected boolean, but got null, \
             Right: Failed or case. \
             Left: Invalid primitive. Expected number, but got null, \
             Right: Invalid primitive. Expected string, but got null"
        );
    }

    #[test]
    fn fluent_method_builds_the_same_schema() {
        let schema = boolean().or(number());
        assert!(schema.is_valid(Some(&json!(true))));
        assert!(!schema.is_valid(Some(&json!("x"))));
    }

    #[test]
    fn into_parts_round_trip() {
        let (l, r) = or(boolean(), number()).into_parts();
        assert!(l.is_valid(Some(&json!(true))));
        assert!(r.is_valid(Some(&json!(1))));
    }
}
