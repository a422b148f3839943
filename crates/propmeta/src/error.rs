//! Types for working with errors produced by propmeta.

/// A specialized `Result` type for propmeta.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a [`PropertyLister`](crate::PropertyLister).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("no properties registered for type {type_name}")]
    NotRegistered { type_name: String },
    #[error("{0}")]
    Failed(String),
}

impl From<String> for IntrospectionError {
    fn from(err: String) -> Self {
        IntrospectionError::Failed(err)
    }
}

impl From<&str> for IntrospectionError {
    fn from(err: &str) -> Self {
        IntrospectionError::Failed(err.to_owned())
    }
}

/// Represents all the ways a metadata query can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The column index was out of range, or the property list could not be
    /// produced when the metadata was constructed.
    #[error("{0}")]
    Metadata(String),

    /// The operation is part of the metadata interface but is not implemented.
    #[error("unsupported metadata operation: {operation}")]
    Unsupported { operation: &'static str },
}

impl Error {
    pub fn invalid_column_index(index: usize) -> Self {
        Error::Metadata(format!("Invalid columnIndex {index}"))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }

    /// Returns the message carried by a metadata error.
    pub fn metadata_message(&self) -> Option<&str> {
        match self {
            Error::Metadata(message) => Some(message),
            _ => None,
        }
    }
}

impl From<IntrospectionError> for Error {
    fn from(error: IntrospectionError) -> Self {
        Error::Metadata(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message() {
        let err = Error::invalid_column_index(7);
        assert_eq!(err.to_string(), "Invalid columnIndex 7");
        assert_eq!(err.metadata_message(), Some("Invalid columnIndex 7"));
        assert!(!err.is_unsupported());
    }

    #[test]
    fn introspection_error_keeps_message() {
        let err: Error = IntrospectionError::NotRegistered {
            type_name: "app::User".into(),
        }
        .into();
        assert_eq!(
            err.metadata_message(),
            Some("no properties registered for type app::User")
        );

        let err: Error = IntrospectionError::from("property list unavailable").into();
        assert_eq!(err.to_string(), "property list unavailable");
    }

    #[test]
    fn unsupported_names_operation() {
        let err = Error::Unsupported {
            operation: "precision",
        };
        assert!(err.is_unsupported());
        assert_eq!(err.metadata_message(), None);
        assert_eq!(err.to_string(), "unsupported metadata operation: precision");
    }
}
