use crate::field::FieldHandle;
use indexmap::IndexMap;
use propkit_types::{Error, Result, ValueKind, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

type Getter<O> = for<'a> fn(&'a O) -> &'a dyn FieldHandle;
type GetterMut<O> = for<'a> fn(&'a mut O) -> &'a mut dyn FieldHandle;

/// Projects an owner onto one of its fields.
///
/// Accessors are plain function pointers, usually built from non-capturing
/// closures such as `Accessor::<Obj>::new(|o| &o.count, |o| &mut o.count)`.
/// They borrow the field only for the duration of a call, so a registry can
/// live inside the owner it describes.
pub struct Accessor<O: ?Sized> {
    get: Getter<O>,
    get_mut: GetterMut<O>,
}

impl<O: ?Sized> Accessor<O> {
    pub fn new(get: Getter<O>, get_mut: GetterMut<O>) -> Self {
        Self { get, get_mut }
    }

    /// Borrows the field from `owner`.
    pub fn field<'a>(&self, owner: &'a O) -> &'a dyn FieldHandle {
        (self.get)(owner)
    }

    /// Mutably borrows the field from `owner`.
    pub fn field_mut<'a>(&self, owner: &'a mut O) -> &'a mut dyn FieldHandle {
        (self.get_mut)(owner)
    }
}

impl<O: ?Sized> Clone for Accessor<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for Accessor<O> {}

struct Entry<O: ?Sized> {
    kind: ValueKind,
    accessor: Accessor<O>,
}

/// Name-keyed, declaration-ordered table of an owner's fields.
///
/// Names are unique: registering a name twice fails and keeps the first
/// entry. Enumeration follows registration order.
pub struct Registry<O: ?Sized> {
    entries: IndexMap<String, Entry<O>>,
}

impl<O: ?Sized> Registry<O> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds `field` under its own name.
    ///
    /// Fails with [`Error::DuplicateName`] if the name is taken; the
    /// existing entry is left as it was.
    pub fn register_field(&mut self, field: &dyn FieldHandle, accessor: Accessor<O>) -> Result<()> {
        let name = field.name();
        if self.entries.contains_key(name) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
            });
        }
        let kind = field.kind();
        self.entries
            .insert(name.to_string(), Entry { kind, accessor });
        debug!(field = %name, kind = %kind, "Parameter registered");
        Ok(())
    }

    /// Names of all registered fields, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Kind of the field registered under `name`, if any.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.entries.get(name).map(|e| e.kind)
    }

    /// Looks up the accessor for `name`.
    pub fn accessor(&self, name: &str) -> Result<Accessor<O>> {
        self.entries
            .get(name)
            .map(|e| e.accessor)
            .ok_or_else(|| Error::NameNotFound {
                name: name.to_string(),
            })
    }

    fn accessors(&self) -> impl Iterator<Item = Accessor<O>> + '_ {
        self.entries.values().map(|e| e.accessor)
    }
}

impl<O: ?Sized> Default for Registry<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ?Sized> fmt::Debug for Registry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, e)| (name, e.kind)))
            .finish()
    }
}

/// Static description of one registered parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    pub kind: ValueKind,
    pub rule: String,
}

/// Name, kind and current value of one registered parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamEntry {
    pub name: String,
    pub kind: ValueKind,
    pub value: Variant,
}

/// An object that exposes its fields through a [`Registry`].
///
/// Implementors only provide [`registry`](Self::registry); the generic
/// name-keyed surface is supplied by the default methods.
pub trait FieldOwner: Sized {
    fn registry(&self) -> &Registry<Self>;

    /// Names of all parameters in declaration order.
    fn list_fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry().names()
    }

    /// Borrows the field registered under `name`.
    fn field(&self, name: &str) -> Result<&dyn FieldHandle> {
        let accessor = self.registry().accessor(name)?;
        let field = accessor.field(self);
        ensure_resolves(field, name)?;
        Ok(field)
    }

    /// Reads a parameter as a [`Variant`].
    ///
    /// Fails with [`Error::NameNotFound`] if `name` is not registered.
    fn get_param(&self, name: &str) -> Result<Variant> {
        Ok(self.field(name)?.export())
    }

    /// Writes a parameter from a [`Variant`].
    ///
    /// Fails with [`Error::NameNotFound`] if `name` is not registered or its
    /// accessor resolves to a field with another name, and passes through
    /// the field's `TypeMismatch` or `ValidationFailed` unchanged. A failed
    /// write leaves every field as it was.
    fn set_param(&mut self, name: &str, value: Variant) -> Result<()> {
        let accessor = self.registry().accessor(name)?;
        let field = accessor.field_mut(self);
        ensure_resolves(field, name)?;
        field.import(value)?;
        debug!(field = %name, "Parameter updated");
        Ok(())
    }

    /// Describes the parameter registered under `name`.
    fn describe(&self, name: &str) -> Result<ParamInfo> {
        let field = self.field(name)?;
        Ok(ParamInfo {
            name: field.name().to_string(),
            kind: field.kind(),
            rule: field.rule().to_string(),
        })
    }

    /// Current value of every parameter, in declaration order.
    fn snapshot(&self) -> Vec<ParamEntry> {
        self.registry()
            .accessors()
            .map(|accessor| {
                let field = accessor.field(self);
                ParamEntry {
                    name: field.name().to_string(),
                    kind: field.kind(),
                    value: field.export(),
                }
            })
            .collect()
    }
}

/// Rejects an accessor that lands on a field not named `name`.
fn ensure_resolves(field: &dyn FieldHandle, name: &str) -> Result<()> {
    if field.name() == name {
        return Ok(());
    }
    warn!(field = %name, resolved = %field.name(), "Accessor resolves to a different field");
    Err(Error::NameNotFound {
        name: name.to_string(),
    })
}
