//! The result-set metadata interface.

use std::any::{Any, TypeId};

use crate::{Error, Result};

/// Whether a column admits `NULL` values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Nullability {
    NoNulls,
    Nullable,
    Unknown,
}

pub(crate) fn unsupported(operation: &'static str) -> Error {
    tracing::trace!(target: "propmeta", operation, "unsupported metadata query");
    Error::Unsupported { operation }
}

/// Describes the columns of a tabular result.
///
/// Column indices are 1-based. Only the column count, name, class name and
/// read-only flag must be provided; every other query fails with
/// [`Error::Unsupported`] unless an implementation overrides it.
pub trait ResultSetMetadata {
    fn column_count(&self) -> usize;

    fn column_name(&self, column: usize) -> Result<&str>;

    /// Fully-qualified name of the column's declared value type.
    fn column_class_name(&self, column: usize) -> Result<&str>;

    fn is_read_only(&self, column: usize) -> Result<bool>;

    fn catalog_name(&self, _column: usize) -> Result<&str> {
        Err(unsupported("catalog_name"))
    }

    fn column_display_size(&self, _column: usize) -> Result<u32> {
        Err(unsupported("column_display_size"))
    }

    fn column_label(&self, _column: usize) -> Result<&str> {
        Err(unsupported("column_label"))
    }

    fn column_type(&self, _column: usize) -> Result<i32> {
        Err(unsupported("column_type"))
    }

    fn column_type_name(&self, _column: usize) -> Result<&str> {
        Err(unsupported("column_type_name"))
    }

    fn precision(&self, _column: usize) -> Result<u32> {
        Err(unsupported("precision"))
    }

    fn scale(&self, _column: usize) -> Result<i32> {
        Err(unsupported("scale"))
    }

    fn schema_name(&self, _column: usize) -> Result<&str> {
        Err(unsupported("schema_name"))
    }

    fn table_name(&self, _column: usize) -> Result<&str> {
        Err(unsupported("table_name"))
    }

    fn is_auto_increment(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_auto_increment"))
    }

    fn is_case_sensitive(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_case_sensitive"))
    }

    fn is_currency(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_currency"))
    }

    fn is_definitely_writable(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_definitely_writable"))
    }

    fn is_nullable(&self, _column: usize) -> Result<Nullability> {
        Err(unsupported("is_nullable"))
    }

    fn is_searchable(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_searchable"))
    }

    fn is_signed(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_signed"))
    }

    fn is_writable(&self, _column: usize) -> Result<bool> {
        Err(unsupported("is_writable"))
    }

    /// Return `self` viewed as the implementation identified by `interface`.
    fn unwrap_as(&self, _interface: TypeId) -> Result<&dyn Any> {
        Err(unsupported("unwrap_as"))
    }

    fn is_wrapper_for(&self, _interface: TypeId) -> Result<bool> {
        Err(unsupported("is_wrapper_for"))
    }
}
