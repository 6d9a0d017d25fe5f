//! Core validation types and traits.
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Schema`], [`SchemaExt`]
//! - **Result model**: [`ValidationResult`]
//! - **Errors**: [`ValidationError`]
//! - **Kinds**: [`ValueKind`]
//!
//! Everything else in the crate — primitive schemas, structural schemas,
//! logical combinators — is built on these four pieces.

pub mod error;
pub mod kind;
pub mod traits;

pub use error::ValidationError;
pub use kind::ValueKind;
pub use traits::{Schema, SchemaExt, ValidationResult};
