//! Resolver error types.

use sd_storage::StorageError;
use thiserror::Error;

/// Errors surfaced while loading or consulting the directory.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The directory could not be loaded from storage.
    #[error("directory load failed")]
    Load(#[from] StorageError),
}

impl ResolveError {
    /// Renders the single human-readable diagnostic string the host shows
    /// in place of a resolved name: the primary message plus the
    /// underlying cause's message, when one exists.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        use std::error::Error as _;

        let mut text = format!("Error querying directory.\n{self}");
        if let Some(source) = self.source() {
            text.push_str(&format!("\ncaused by: {source}"));
        }
        text
    }
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
