//! # sd-storage-sql
//!
//! SQLx-based directory storage for secdir.
//!
//! This crate reads the two directory tables from `PostgreSQL` and exposes
//! them through the [`sd_storage::DirectoryProvider`] trait.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod directory;
pub mod error;
pub mod pool;

pub use directory::PgDirectoryProvider;
pub use pool::{create_pool, ping, PoolConfig};
