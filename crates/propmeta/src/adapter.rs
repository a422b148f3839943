use crate::{
    Error, Properties, PropertyDescriptor, PropertyLister, Result, SourceType,
    logger::{self, LogSettings},
    metadata::ResultSetMetadata,
};

/// Result-set metadata that treats each property of a source type as a column.
///
/// The property list is produced once, at construction, and never changes
/// afterwards. Column `1` is the first property in listing order.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    source: SourceType,
    descriptors: Box<[PropertyDescriptor]>,
}

impl PropertyMetadata {
    /// Introspect `source` through `lister`.
    ///
    /// Fails with [`Error::Metadata`] carrying the lister's message if the
    /// properties cannot be listed.
    pub fn new<L>(source: SourceType, lister: &L) -> Result<Self>
    where
        L: PropertyLister + ?Sized,
    {
        Self::with_log_settings(source, lister, &LogSettings::default())
    }

    pub fn with_log_settings<L>(
        source: SourceType,
        lister: &L,
        settings: &LogSettings,
    ) -> Result<Self>
    where
        L: PropertyLister + ?Sized,
    {
        let descriptors = lister.list_properties(&source)?;
        Ok(Self::from_descriptors(source, descriptors, settings))
    }

    /// Build metadata for a type that describes itself.
    pub fn of<T: Properties>() -> Self {
        Self::from_descriptors(T::source_type(), T::properties(), &LogSettings::default())
    }

    fn from_descriptors(
        source: SourceType,
        descriptors: Vec<PropertyDescriptor>,
        settings: &LogSettings,
    ) -> Self {
        logger::log_introspection(settings, source.name(), descriptors.len());
        Self {
            source,
            descriptors: descriptors.into_boxed_slice(),
        }
    }

    pub fn source_type(&self) -> &SourceType {
        &self.source
    }

    /// All descriptors, in column order.
    pub fn descriptors(&self) -> &[PropertyDescriptor] {
        &self.descriptors
    }

    /// Returns the descriptor for the 1-based `column`.
    pub fn get_descriptor(&self, column: usize) -> Result<&PropertyDescriptor> {
        column
            .checked_sub(1)
            .and_then(|i| self.descriptors.get(i))
            .ok_or_else(|| {
                tracing::debug!(
                    target: "propmeta",
                    source_type = self.source.name(),
                    column,
                    count = self.descriptors.len(),
                    "column index out of range"
                );
                Error::invalid_column_index(column)
            })
    }

    /// 1-based index of the first column named `name`.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.name() == name)
            .map(|i| i + 1)
    }
}

impl ResultSetMetadata for PropertyMetadata {
    fn column_count(&self) -> usize {
        self.descriptors.len()
    }

    fn column_name(&self, column: usize) -> Result<&str> {
        Ok(self.get_descriptor(column)?.name())
    }

    fn column_class_name(&self, column: usize) -> Result<&str> {
        Ok(self.get_descriptor(column)?.type_name())
    }

    fn is_read_only(&self, column: usize) -> Result<bool> {
        Ok(self.get_descriptor(column)?.is_read_only())
    }
}
