use propkit_types::{Result, ValueKind, Variant};
use std::fmt;

/// A scalar type that can be stored in a [`ValidatedField`](crate::ValidatedField)
/// and carried through a [`Variant`].
///
/// Implemented for exactly the kinds a variant can hold: `i64`, `f64` and `String`.
pub trait ParamKind: Clone + fmt::Debug + 'static {
    /// Tag used when this type is wrapped in a [`Variant`].
    const KIND: ValueKind;

    /// Wraps the value with its matching tag.
    fn into_variant(self) -> Variant;

    /// Unwraps a variant, failing with `TypeMismatch` if the tag differs.
    fn from_variant(value: Variant) -> Result<Self>;
}

impl ParamKind for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_variant(self) -> Variant {
        Variant::Int(self)
    }

    fn from_variant(value: Variant) -> Result<Self> {
        value.as_int()
    }
}

impl ParamKind for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_variant(self) -> Variant {
        Variant::Float(self)
    }

    fn from_variant(value: Variant) -> Result<Self> {
        value.as_float()
    }
}

impl ParamKind for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_variant(self) -> Variant {
        Variant::Text(self)
    }

    fn from_variant(value: Variant) -> Result<Self> {
        value.into_text()
    }
}
