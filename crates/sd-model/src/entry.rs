//! Directory entry domain model.
//!
//! The security database exposes two read-only tables, one for users and
//! one for groups. Both reduce to the same shape: a unique identifier
//! paired with a display name.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which directory table a principal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// An entry from the users table.
    User,
    /// An entry from the groups table.
    Group,
}

impl PrincipalKind {
    /// Returns the lowercase label used in output and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory entry: an identifier paired with its display name.
///
/// Entries are read verbatim from the database; a name may be empty when
/// the source row carries an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

impl DirectoryEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Checks whether the entry carries a non-empty display name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation() {
        let id = Uuid::new_v4();
        let entry = DirectoryEntry::new(id, "Alice");

        assert_eq!(entry.id, id);
        assert_eq!(entry.name, "Alice");
        assert!(entry.has_name());
    }

    #[test]
    fn empty_name_is_detected() {
        let entry = DirectoryEntry::new(Uuid::new_v4(), "");
        assert!(!entry.has_name());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(PrincipalKind::User.to_string(), "user");
        assert_eq!(PrincipalKind::Group.to_string(), "group");
    }
}
