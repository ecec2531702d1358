//! CLI argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::config::OutputFormat;

/// secdir - resolve directory identifiers against the security database.
#[derive(Debug, Parser)]
#[command(name = "secdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database URL (overrides config).
    #[arg(short = 'd', long, env = "SECDIR_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an identifier to a user or group name.
    Resolve {
        /// Identifier to resolve.
        id: Uuid,
    },

    /// List a directory table.
    #[command(subcommand)]
    List(ListCommand),

    /// Database connectivity check.
    Status,

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Directory listing commands.
#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List entries from the users table.
    Users,

    /// List entries from the groups table.
    Groups,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the active configuration.
    Show,

    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_takes_a_uuid() {
        let cli = Cli::try_parse_from([
            "secdir",
            "resolve",
            "6fa459ea-ee8a-3ca4-894e-db77e160355e",
        ])
        .unwrap();

        match cli.command {
            Command::Resolve { id } => {
                assert_eq!(id.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_uuid_is_rejected() {
        assert!(Cli::try_parse_from(["secdir", "resolve", "not-a-uuid"]).is_err());
    }
}
