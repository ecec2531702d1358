//! Directory table configuration.
//!
//! Table and column names are configuration constants. They are never
//! derived from the identifier being resolved.

use serde::{Deserialize, Serialize};

/// Location of one identifier/name table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Fully qualified table name (e.g., "security.users").
    pub table: String,
    /// Name of the identifier column.
    pub key_column: String,
    /// Name of the display-name column.
    pub value_column: String,
}

impl TableSpec {
    /// Creates a new table spec.
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        key_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            key_column: key_column.into(),
            value_column: value_column.into(),
        }
    }
}

/// Locations of both directory tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySpec {
    /// The users table.
    pub users: TableSpec,
    /// The groups table.
    pub groups: TableSpec,
}

impl Default for DirectorySpec {
    fn default() -> Self {
        Self {
            users: TableSpec::new("security.users", "user_id", "user_name"),
            groups: TableSpec::new("security.groups", "group_id", "group_name"),
        }
    }
}
