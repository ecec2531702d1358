//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sd_storage::StorageError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use sd_storage::StorageError;

    use super::*;

    #[test]
    fn storage_errors_convert() {
        let err = CliError::from(StorageError::Connection("refused".to_string()));
        assert!(err.to_string().contains("refused"));
    }
}
