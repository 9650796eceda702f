//! Core type definitions for propkit.
//!
//! This crate defines the types every other propkit crate depends on:
//! - [`Variant`] — a closed tagged union over the supported scalar kinds
//! - [`ValueKind`] — the tag of a [`Variant`], usable on its own for introspection
//! - [`Error`] — the single error taxonomy shared by values, fields and registries
//!
//! Nothing here knows about fields or owners; see `propkit-model` for those.

mod variant;

pub use variant::{ValueKind, Variant};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading, writing or registering parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A variant was read or converted as a kind other than the one it holds.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    /// A proposed value was rejected by a field's validator.
    #[error("validation failed for '{field}': {value} is not {rule}")]
    ValidationFailed {
        field: String,
        value: String,
        rule: String,
    },

    /// No parameter is registered under the requested name.
    #[error("parameter not found: {name}")]
    NameNotFound { name: String },

    /// A parameter with this name is already registered.
    #[error("duplicate parameter name: {name}")]
    DuplicateName { name: String },
}

/// Payload-free discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    TypeMismatch,
    ValidationFailed,
    NameNotFound,
    DuplicateName,
}

impl Error {
    /// Returns which branch of the taxonomy this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Error::NameNotFound { .. } => ErrorKind::NameNotFound,
            Error::DuplicateName { .. } => ErrorKind::DuplicateName,
        }
    }

    pub(crate) fn mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Error::TypeMismatch { expected, found }
    }
}
