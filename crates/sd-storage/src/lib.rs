//! # sd-storage
//!
//! Storage abstraction traits for secdir.
//!
//! This crate defines the provider interface that must be implemented by
//! concrete directory backends (SQL, in-memory, etc.) and the
//! configuration describing where the two directory tables live.
//!
//! ## Provider Traits
//!
//! - [`DirectoryProvider`] - read access to the users and groups tables

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod directory;
pub mod error;
pub mod tables;

pub use directory::DirectoryProvider;
pub use error::{StorageError, StorageResult};
pub use tables::{DirectorySpec, TableSpec};
