//! # sd-model
//!
//! Domain models for secdir.
//!
//! This crate defines the entities shared by the storage and resolver
//! layers: directory entries read from the security database, and the
//! typed outcome of resolving an identifier against them.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod entry;
pub mod resolution;

pub use entry::{DirectoryEntry, PrincipalKind};
pub use resolution::Resolution;
