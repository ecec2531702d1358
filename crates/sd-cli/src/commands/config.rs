//! Configuration commands.

use crate::cli::ConfigCommand;
use crate::output::success;
use crate::{CliConfig, CliError};

/// Runs a config command.
///
/// # Errors
///
/// Fails when the config file cannot be serialized or written.
pub fn run_config(cmd: ConfigCommand, config: &CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => {
            let text = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("failed to serialize config: {e}")))?;
            print!("{text}");
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = CliConfig::config_path()?;
            if path.exists() && !force {
                return Err(CliError::InvalidArgument(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            CliConfig::default().save()?;
            success(&format!("wrote {}", path.display()));
            Ok(())
        }
    }
}
