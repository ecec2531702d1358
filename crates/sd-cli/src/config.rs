//! CLI configuration.

use std::path::PathBuf;

use sd_storage::DirectorySpec;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Database connection URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Directory table locations.
    #[serde(default)]
    pub tables: DirectorySpec,
}

/// Default database URL.
fn default_database_url() -> String {
    "postgres://localhost/security".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            tables: DirectorySpec::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, falling back to defaults when no
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the file exists but cannot be parsed.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if serialization fails and an IO error
    /// if the file cannot be written.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` when the home directory is unknown.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".secdir").join("config.toml"))
    }

    /// Gets the effective database URL (from args or config).
    #[must_use]
    pub fn effective_database_url(&self, arg_url: Option<&str>) -> String {
        arg_url.map_or_else(|| self.database_url.clone(), ToString::to_string)
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare display string or table.
    #[default]
    Plain,
    /// JSON format.
    Json,
}
