//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading the directory tables.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Database query error.
    #[error("Database query error: {0}")]
    Query(String),

    /// Invalid table or column configuration.
    #[error("Invalid directory configuration: {0}")]
    InvalidConfig(String),

    /// Internal error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Checks if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Checks if this is a query error.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
