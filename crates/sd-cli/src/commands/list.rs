//! Directory listing commands.

use sd_storage::DirectoryProvider;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::ListCommand;
use crate::config::OutputFormat;
use crate::output::output;
use crate::CliConfig;

use super::connect;

/// Directory entry representation for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EntryDisplay {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Runs a list command.
///
/// # Errors
///
/// Fails when the database cannot be reached or the read fails.
pub async fn run_list(
    cmd: ListCommand,
    config: &CliConfig,
    database_url: Option<&str>,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let provider = connect(config, database_url).await?;

    let entries = match cmd {
        ListCommand::Users => provider.list_users().await?,
        ListCommand::Groups => provider.list_groups().await?,
    };

    let rows: Vec<EntryDisplay> = entries
        .into_iter()
        .map(|entry| EntryDisplay {
            id: entry.id.to_string(),
            name: entry.name,
        })
        .collect();

    output(&rows, format)
}
