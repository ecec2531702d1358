//! Directory storage provider trait.

use async_trait::async_trait;
use sd_model::DirectoryEntry;

use crate::error::StorageResult;

/// Provider for the two read-only directory tables.
///
/// Implementations must be thread-safe and support concurrent access.
/// The directory is read in full; there is no per-key query path, since
/// the resolver caches both tables on first use.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Reads every entry from the users table.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Connection` if the database cannot be
    /// reached and `StorageError::Query` if the read fails.
    async fn list_users(&self) -> StorageResult<Vec<DirectoryEntry>>;

    /// Reads every entry from the groups table.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Connection` if the database cannot be
    /// reached and `StorageError::Query` if the read fails.
    async fn list_groups(&self) -> StorageResult<Vec<DirectoryEntry>>;
}
