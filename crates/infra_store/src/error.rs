//! Storage error types

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while reading or writing documents
#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys are file names, so only `[A-Za-z0-9_-]` is allowed
    #[error("Invalid document key: '{0}'")]
    InvalidKey(String),

    /// The storage directory or a document file could not be accessed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored document is not valid JSON, or could not be encoded
    #[error("Serialization error for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            key: key.into(),
            source,
        }
    }

    /// Checks if this error is an I/O issue
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }
}

impl From<StoreError> for PortError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::InvalidKey(_) => PortError::validation_field(error.to_string(), "key"),
            StoreError::Io { .. } => PortError::Connection {
                message: error.to_string(),
                source: Some(Box::new(error)),
            },
            StoreError::Serialization { .. } => PortError::transformation(error.to_string()),
        }
    }
}
