//! The core `Schema` contract.
//!
//! A schema is an immutable, stateless description of an accepted shape.
//! Its one required capability is [`Schema::validate`]: given a possibly
//! absent untyped value, produce a [`ValidationResult`]. Everything else —
//! the boolean guard view, the fluent combinator methods — is derived from
//! that single operation.

use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{And, Optional, Or};
use crate::foundation::ValidationError;

// ============================================================================
// RESULT MODEL
// ============================================================================

/// The two-case outcome of one validation attempt.
///
/// `Ok` carries the validated value — the original input, untouched, so
/// extra object fields survive and no copy is made. `Err` carries exactly
/// one [`ValidationError`]. Failures are data, never panics: misusing the
/// API cannot surface as an unhandled fault from the engine.
pub type ValidationResult<'v> = Result<Option<&'v Value>, ValidationError>;

// ============================================================================
// SCHEMA TRAIT
// ============================================================================

/// An immutable description of an accepted value shape.
///
/// Schemas are built once at configuration time and reused across many
/// validation calls. They hold no mutable state, so a schema tree is safe
/// to share across threads without locking; every `validate` call is
/// independently reentrant. A well-formed tree is acyclic — a schema must
/// not reference itself, directly or transitively. This is a documented
/// precondition, not a runtime check.
///
/// The input is `Option<&Value>`: `None` stands for a value that is absent
/// altogether, which arises for missing object fields and is what
/// [`optional`](crate::combinators::optional) accepts. Top-level callers
/// pass `Some(&value)`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let schema = object()
///     .field("name", string())
///     .field("age", optional(number()));
///
/// let input = json!({ "name": "ada", "extra": true });
/// assert!(schema.validate(Some(&input)).is_ok());
/// assert!(schema.validate(Some(&json!(42))).is_err());
/// ```
///
/// Implementing a schema outside this crate:
///
/// ```rust
/// use serde_json::Value;
/// use shapecheck::foundation::{Schema, ValidationError, ValidationResult};
///
/// /// Accepts only non-empty strings.
/// #[derive(Debug)]
/// struct NonEmptyString;
///
/// impl Schema for NonEmptyString {
///     fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
///         match input {
///             Some(Value::String(s)) if !s.is_empty() => Ok(input),
///             _ => Err(ValidationError::new("expected a non-empty string")),
///         }
///     }
/// }
/// ```
pub trait Schema: std::fmt::Debug + Send + Sync {
    /// Checks `input` against this schema.
    ///
    /// Returns the original input on success; on failure, exactly one
    /// error describing the first violation found.
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v>;

    /// Plain membership test: does this schema accept `input`?
    ///
    /// A derived view over [`validate`](Schema::validate) that discards
    /// the payload and error detail. It is deliberately not a separate
    /// implementation, so the two views cannot drift apart.
    fn is_valid(&self, input: Option<&Value>) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// SHARED-OWNERSHIP IMPLS
// ============================================================================

// A schema tree owns its children by value or by shared reference; these
// impls let the same sub-schema be reused across multiple parents.

impl<S: Schema + ?Sized> Schema for &S {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        (**self).validate(input)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        (**self).validate(input)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn validate<'v>(&self, input: Option<&'v Value>) -> ValidationResult<'v> {
        (**self).validate(input)
    }
}

// ============================================================================
// SCHEMA EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every schema.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapecheck::prelude::*;
///
/// let id = string().or(number());
/// assert!(id.is_valid(Some(&json!("a7"))));
/// assert!(id.is_valid(Some(&json!(7))));
/// assert!(!id.is_valid(Some(&json!(true))));
/// ```
pub trait SchemaExt: Schema + Sized {
    /// Accepts a value iff both `self` and `other` accept it.
    ///
    /// Both sides always run, so the failure message lists every violated
    /// side. See [`And`].
    fn and<R: Schema>(self, other: R) -> And<Self, R> {
        And::new(self, other)
    }

    /// Accepts a value iff `self` or `other` accepts it, trying `self`
    /// first. See [`Or`].
    fn or<R: Schema>(self, other: R) -> Or<Self, R> {
        Or::new(self, other)
    }

    /// Additionally accepts absent values and `null`. See [`Optional`].
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Moves this schema behind an `Arc` so it can be shared across
    /// several parent schemas without duplication.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use shapecheck::prelude::*;
    ///
    /// let point = object().field("x", number()).field("y", number()).shared();
    /// let segment = object()
    ///     .field("from", point.clone())
    ///     .field("to", point);
    ///
    /// let input = json!({ "from": {"x": 0, "y": 0}, "to": {"x": 1, "y": 2} });
    /// assert!(segment.is_valid(Some(&input)));
    /// ```
    fn shared(self) -> Arc<dyn Schema>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<S: Schema + Sized> SchemaExt for S {}

// ============================================================================
// TESTS
// ============================================================================
