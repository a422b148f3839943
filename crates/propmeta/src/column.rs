use std::any::{self, TypeId};
use std::fmt::{self, Display, Formatter};

/// Identifies the type whose instances are modeled as rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceType {
    id: TypeId,
    name: &'static str,
}

impl SourceType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Fully-qualified name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

/// Metadata about a single property, which the adapter presents as one column.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PropertyDescriptor {
    name: String,
    type_name: &'static str,
    has_setter: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, type_name: &'static str, has_setter: bool) -> Self {
        Self {
            name: name.into(),
            type_name,
            has_setter,
        }
    }

    /// Describe a property whose declared value type is `T`.
    pub fn of<T: ?Sized>(name: impl Into<String>, has_setter: bool) -> Self {
        Self::new(name, any::type_name::<T>(), has_setter)
    }

    pub fn read_write<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::of::<T>(name, true)
    }

    pub fn read_only<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::of::<T>(name, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name of the declared value type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn has_setter(&self) -> bool {
        self.has_setter
    }

    pub fn is_read_only(&self) -> bool {
        !self.has_setter
    }
}

impl Display for PropertyDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}
