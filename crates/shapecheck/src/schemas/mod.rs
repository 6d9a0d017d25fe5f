//! Built-in schemas: primitive leaves and structural composites.
//!
//! - **Primitive**: [`number`], [`string`], [`boolean`]
//! - **Structural**: [`object`], [`array`], [`tuple`]
//!
//! Structural schemas own their child schemas for their whole lifetime,
//! by value or behind a shared `Arc`, and never mutate them; the logical
//! combinators live in [`crate::combinators`].

pub mod array;
pub mod object;
pub mod primitive;
pub mod tuple;

pub use array::{ArraySchema, array};
pub use object::{ObjectSchema, object};
pub use primitive::{BooleanSchema, NumberSchema, StringSchema, boolean, number, string};
pub use tuple::{TupleSchema, tuple};
