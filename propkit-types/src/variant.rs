//! The dynamic value carried across the generic parameter interface.
//!
//! A [`Variant`] always holds exactly one payload and its tag is the enum
//! discriminant, so the two can never disagree. Reads are strict: there is
//! no numeric widening and no parsing of text, so `Int(1)` cannot be read
//! as a float and `Text("123")` cannot be read as a number.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kinds a [`Variant`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int,
    Float,
    Text,
}

impl ValueKind {
    /// Returns the kind name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::Text => "Text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed tagged union over the supported scalar kinds.
///
/// Different kinds are never equal: `Int(1) != Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 text.
    Text(String),
}

impl Variant {
    /// Returns the tag of the stored payload.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Variant::Int(_) => ValueKind::Int,
            Variant::Float(_) => ValueKind::Float,
            Variant::Text(_) => ValueKind::Text,
        }
    }

    /// Get the type name as a string.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Variant::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Variant::Float(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Variant::Text(_))
    }

    /// Reads the payload as an integer.
    ///
    /// Fails with [`Error::TypeMismatch`] unless the variant is `Int`.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Variant::Int(i) => Ok(*i),
            other => Err(Error::mismatch(ValueKind::Int, other.kind())),
        }
    }

    /// Reads the payload as a float.
    ///
    /// Fails with [`Error::TypeMismatch`] unless the variant is `Float`;
    /// an `Int` is not widened.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Variant::Float(d) => Ok(*d),
            other => Err(Error::mismatch(ValueKind::Float, other.kind())),
        }
    }

    /// Borrows the payload as text.
    ///
    /// Fails with [`Error::TypeMismatch`] unless the variant is `Text`.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Variant::Text(s) => Ok(s),
            other => Err(Error::mismatch(ValueKind::Text, other.kind())),
        }
    }

    /// Consumes the variant and returns the owned text payload.
    pub fn into_text(self) -> Result<String> {
        match self {
            Variant::Text(s) => Ok(s),
            other => Err(Error::mismatch(ValueKind::Text, other.kind())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Int(i) => write!(f, "{i}"),
            Variant::Float(d) => write!(f, "{d}"),
            Variant::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Int(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Float(value)
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Text(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Text(value.to_owned())
    }
}

impl TryFrom<Variant> for i64 {
    type Error = Error;

    fn try_from(value: Variant) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<Variant> for f64 {
    type Error = Error;

    fn try_from(value: Variant) -> Result<Self> {
        value.as_float()
    }
}

impl TryFrom<Variant> for String {
    type Error = Error;

    fn try_from(value: Variant) -> Result<Self> {
        value.into_text()
    }
}
