//! Typed outcome of a directory resolution.
//!
//! The host ultimately shows a single string, but callers can distinguish
//! a resolved name from a miss programmatically instead of comparing
//! against the `"Unknown"` sentinel.

use serde::{Deserialize, Serialize};

use crate::PrincipalKind;

/// Sentinel shown when an identifier maps to no usable name.
pub const UNKNOWN: &str = "Unknown";

/// The outcome of resolving an identifier against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Resolution {
    /// The identifier mapped to a named principal.
    Resolved {
        /// Display name of the principal.
        name: String,
        /// Table the name came from.
        kind: PrincipalKind,
    },
    /// The identifier is absent from both directory tables.
    Unknown,
}

impl Resolution {
    /// Creates a resolution from the users table.
    #[must_use]
    pub fn user(name: impl Into<String>) -> Self {
        Self::Resolved {
            name: name.into(),
            kind: PrincipalKind::User,
        }
    }

    /// Creates a resolution from the groups table.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self::Resolved {
            name: name.into(),
            kind: PrincipalKind::Group,
        }
    }

    /// Checks whether the identifier resolved to nothing.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns the string the host displays.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Resolved { name, .. } => name,
            Self::Unknown => UNKNOWN,
        }
    }
}
