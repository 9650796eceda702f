use crate::kind::ParamKind;
use crate::registry::{Accessor, Registry};
use crate::validator::Validator;
use propkit_types::{Error, Result, ValueKind, Variant};
use std::fmt;
use tracing::debug;

/// Type-erased view of a field, used by [`Registry`] for generic access.
///
/// Implemented by every [`ValidatedField`], whatever its scalar kind.
pub trait FieldHandle {
    /// The field's name, unique within its owner.
    fn name(&self) -> &str;

    /// The scalar kind this field stores.
    fn kind(&self) -> ValueKind;

    /// Description of the validation rule.
    fn rule(&self) -> &str;

    /// Wraps the current value in a [`Variant`]. Never fails.
    fn export(&self) -> Variant;

    /// Converts `value` to the field's kind and stores it if it validates.
    ///
    /// Fails with `TypeMismatch` or `ValidationFailed`; on failure the
    /// stored value is unchanged.
    fn import(&mut self, value: Variant) -> Result<()>;
}

/// A named, typed value that always satisfies its validator.
///
/// The validator is fixed at construction. Every write, direct or through
/// a [`Variant`], is checked against it and rejected writes leave the
/// previous value in place.
#[derive(Debug)]
pub struct ValidatedField<K> {
    name: String,
    value: K,
    validator: Validator<K>,
}

impl<K: ParamKind> ValidatedField<K> {
    /// Creates a field guarded by an arbitrary validator.
    ///
    /// The initial value must itself pass the validator.
    pub fn new(name: impl Into<String>, initial: K, validator: Validator<K>) -> Result<Self> {
        let name = name.into();
        if !validator.accepts(&initial) {
            return Err(rejected(&name, &initial, &validator));
        }
        Ok(Self {
            name,
            value: initial,
            validator,
        })
    }

    /// Creates a field constrained to the inclusive range `[min, max]`.
    pub fn in_range(name: impl Into<String>, initial: K, min: K, max: K) -> Result<Self>
    where
        K: PartialOrd + fmt::Display + Send + Sync,
    {
        Self::new(name, initial, Validator::range(min, max))
    }

    /// Registers this field with `registry` and hands it back so the owner
    /// can store it.
    ///
    /// `accessor` must project the owner onto this very field.
    pub fn register<O>(self, registry: &mut Registry<O>, accessor: Accessor<O>) -> Result<Self> {
        registry.register_field(&self, accessor)?;
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the current value.
    #[must_use]
    pub fn value(&self) -> &K {
        &self.value
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> K {
        self.value.clone()
    }

    #[must_use]
    pub fn validator(&self) -> &Validator<K> {
        &self.validator
    }

    /// Returns true if `value` would be accepted by [`set`](Self::set).
    #[must_use]
    pub fn accepts(&self, value: &K) -> bool {
        self.validator.accepts(value)
    }

    /// Replaces the value if it passes validation.
    pub fn set(&mut self, value: K) -> Result<()> {
        if !self.validator.accepts(&value) {
            let err = rejected(&self.name, &value, &self.validator);
            debug!(field = %self.name, error = %err, "Write rejected");
            return Err(err);
        }
        self.value = value;
        Ok(())
    }
}

impl<K: ParamKind> FieldHandle for ValidatedField<K> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ValueKind {
        K::KIND
    }

    fn rule(&self) -> &str {
        self.validator.rule()
    }

    fn export(&self) -> Variant {
        self.value.clone().into_variant()
    }

    fn import(&mut self, value: Variant) -> Result<()> {
        let value = K::from_variant(value)?;
        self.set(value)
    }
}

fn rejected<K: fmt::Debug>(field: &str, value: &K, validator: &Validator<K>) -> Error {
    Error::ValidationFailed {
        field: field.to_string(),
        value: format!("{value:?}"),
        rule: validator.rule().to_string(),
    }
}
