//! # secdir
//!
//! Resolves directory identifiers to user and group display names.

#![forbid(unsafe_code)]
#![deny(warnings)]

use clap::Parser;
use sd_cli::{
    cli::{Cli, Command},
    commands::{run_config, run_list, run_resolve, run_status},
    config::CliConfig,
    output::error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Command::Resolve { id } => {
            run_resolve(id, &config, cli.database_url.as_deref(), cli.output).await
        }
        Command::List(cmd) => run_list(cmd, &config, cli.database_url.as_deref(), cli.output).await,
        Command::Status => run_status(&config, cli.database_url.as_deref()).await,
        Command::Config(cmd) => run_config(cmd, &config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
