//! Result-set metadata backed by the property list of a plain Rust type.
//!
//! [`PropertyMetadata`] treats each property of a source type as one column
//! and answers the column count, name, class name and read-only queries of
//! [`ResultSetMetadata`]. Every other query fails with
//! [`Error::Unsupported`]. It exists to drive tests of code that consumes
//! result-set metadata.
//!
//! ```
//! use propmeta::{Properties, PropertyMetadata, ResultSetMetadata};
//!
//! #[derive(Properties)]
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let meta = PropertyMetadata::of::<Person>();
//! assert_eq!(meta.column_count(), 2);
//! assert_eq!(meta.column_name(1).unwrap(), "name");
//! assert_eq!(meta.column_class_name(2).unwrap(), "i32");
//! assert!(meta.precision(1).unwrap_err().is_unsupported());
//! ```

pub use propmeta_macros::*;

mod adapter;
mod column;
mod error;
mod logger;
pub mod metadata;
mod properties;

pub use crate::{
    adapter::PropertyMetadata,
    column::{PropertyDescriptor, SourceType},
    error::{Error, IntrospectionError, Result},
    logger::LogSettings,
    metadata::{Nullability, ResultSetMetadata},
    properties::{Properties, PropertyLister, Registry},
};
