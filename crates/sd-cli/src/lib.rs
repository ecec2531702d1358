//! # sd-cli
//!
//! Command-line front end for secdir.
//!
//! This crate provides the `secdir` binary:
//! - identifier resolution against the security database
//! - directory table listings
//! - database connectivity checks
//! - configuration management

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
