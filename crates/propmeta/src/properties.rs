//! Property listing: the capability the metadata adapter uses to discover
//! the columns of a source type.

use std::any::TypeId;
use std::collections::HashMap;

use crate::{IntrospectionError, PropertyDescriptor, SourceType};

/// A type that can describe its own properties.
///
/// Usually derived with `#[derive(Properties)]`. The derived implementation
/// lists named fields in declaration order, followed by any computed
/// properties declared on the container.
pub trait Properties: 'static {
    fn source_type() -> SourceType {
        SourceType::of::<Self>()
    }

    /// Ordered property list of the type.
    fn properties() -> Vec<PropertyDescriptor>;
}

/// Produces the ordered property list of a source type.
pub trait PropertyLister {
    fn list_properties(
        &self,
        source: &SourceType,
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError>;
}

impl<F> PropertyLister for F
where
    F: Fn(&SourceType) -> Result<Vec<PropertyDescriptor>, IntrospectionError>,
{
    fn list_properties(
        &self,
        source: &SourceType,
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        self(source)
    }
}

/// A [`PropertyLister`] backed by explicit registration.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<TypeId, Vec<PropertyDescriptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type that describes itself. Replaces any earlier entry.
    pub fn register<T: Properties>(&mut self) -> &mut Self {
        self.register_with(T::source_type(), T::properties())
    }

    /// Register a hand-written property list. Replaces any earlier entry.
    pub fn register_with(
        &mut self,
        source: SourceType,
        properties: impl IntoIterator<Item = PropertyDescriptor>,
    ) -> &mut Self {
        let properties: Vec<_> = properties.into_iter().collect();
        tracing::trace!(
            target: "propmeta",
            source_type = source.name(),
            properties = properties.len(),
            "registered property list"
        );
        self.entries.insert(source.id(), properties);
        self
    }

    pub fn contains(&self, source: &SourceType) -> bool {
        self.entries.contains_key(&source.id())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PropertyLister for Registry {
    fn list_properties(
        &self,
        source: &SourceType,
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        self.entries
            .get(&source.id())
            .cloned()
            .ok_or_else(|| IntrospectionError::NotRegistered {
                type_name: source.name().to_owned(),
            })
    }
}
