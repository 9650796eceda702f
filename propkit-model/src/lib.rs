//! Typed parameter model for propkit.
//!
//! Defines the pieces an object needs to expose its fields generically:
//! - [`ParamKind`] — binds a Rust scalar type to its [`ValueKind`] tag
//! - [`Validator`] — the predicate fixed at field construction that gates every write
//! - [`ValidatedField`] — a named, typed slot whose value always satisfies its validator
//! - [`FieldHandle`] — the type-erased view of a field used for generic get/set
//! - [`Registry`] / [`FieldOwner`] — name-keyed, declaration-ordered access to an owner's fields
//! - [`SampleObject`] — a concrete owner with an int, a float and a text parameter
//!
//! Fields are owned directly by their object. The registry only stores
//! accessor functions that project an owner onto one of its fields, so it
//! never holds a reference into the object it lives in.

mod field;
mod kind;
mod registry;
mod sample;
mod validator;

pub use field::{FieldHandle, ValidatedField};
pub use kind::ParamKind;
pub use registry::{Accessor, FieldOwner, ParamEntry, ParamInfo, Registry};
pub use sample::SampleObject;
pub use validator::Validator;

pub use propkit_types::{Error, ErrorKind, Result, ValueKind, Variant};
