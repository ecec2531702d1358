//! # sd-resolver
//!
//! Load-once directory cache and identifier resolver for secdir.
//!
//! The [`Resolver`] owns the cache and a [`sd_storage::DirectoryProvider`].
//! Both directory tables are read on the first resolution request; the
//! mappings are then kept unchanged for the resolver's lifetime. Construct
//! one resolver per session and share it wherever resolution is needed.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

mod cache;
pub mod error;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use resolver::Resolver;
