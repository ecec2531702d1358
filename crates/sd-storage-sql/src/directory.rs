//! `PostgreSQL` implementation of the directory provider.

use async_trait::async_trait;
use sd_model::DirectoryEntry;
use sd_storage::{DirectoryProvider, DirectorySpec, StorageError, StorageResult, TableSpec};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::from_sqlx_error;

/// `PostgreSQL` directory provider.
///
/// Reads the configured users and groups tables in full. The provider is
/// read-only; it never writes to the security database.
pub struct PgDirectoryProvider {
    pool: PgPool,
    spec: DirectorySpec,
}

impl PgDirectoryProvider {
    /// Creates a new `PostgreSQL` directory provider.
    #[must_use]
    pub const fn new(pool: PgPool, spec: DirectorySpec) -> Self {
        Self { pool, spec }
    }

    /// Returns the table configuration in use.
    #[must_use]
    pub const fn spec(&self) -> &DirectorySpec {
        &self.spec
    }

    async fn list_table(&self, table: &TableSpec) -> StorageResult<Vec<DirectoryEntry>> {
        let query = select_pairs(table)?;

        let rows: Vec<(Uuid, String)> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        tracing::debug!(table = %table.table, rows = rows.len(), "directory table read");

        Ok(rows
            .into_iter()
            .map(|(id, name)| DirectoryEntry::new(id, name))
            .collect())
    }
}

#[async_trait]
impl DirectoryProvider for PgDirectoryProvider {
    async fn list_users(&self) -> StorageResult<Vec<DirectoryEntry>> {
        self.list_table(&self.spec.users).await
    }

    async fn list_groups(&self) -> StorageResult<Vec<DirectoryEntry>> {
        self.list_table(&self.spec.groups).await
    }
}

/// Builds the two-column select for a directory table.
///
/// Table and column names come from configuration, never from the value
/// being resolved. They are still validated as SQL identifiers before
/// interpolation, so a malformed configuration fails instead of reaching
/// the server.
fn select_pairs(table: &TableSpec) -> StorageResult<String> {
    for name in [&table.table, &table.key_column, &table.value_column] {
        check_identifier(name)?;
    }

    Ok(format!(
        "SELECT {}, {} FROM {}",
        table.key_column, table.value_column, table.table
    ))
}

/// Validates a (possibly schema-qualified) SQL identifier.
fn check_identifier(name: &str) -> StorageResult<()> {
    let valid = !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidConfig(format!(
            "invalid SQL identifier '{name}'"
        )))
    }
}
