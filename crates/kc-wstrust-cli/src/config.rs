//! CLI configuration.

use std::path::{Path, PathBuf};

use kc_protocol_wsfed::ParserConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Default output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Loads configuration from `path`, or from the default location when
    /// no path is given. A missing default file yields the defaults.
    ///
    /// Environment overrides for the parser are applied last.
    pub fn load(path: Option<&Path>) -> crate::CliResult<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => {
                let default_path = Self::config_path()?;
                if default_path.exists() {
                    Self::load_from(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env_overrides())
    }

    /// Loads configuration from a TOML file.
    pub fn load_from(path: &Path) -> crate::CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::CliError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Gets the default configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".keycloak").join("wstrust.toml"))
    }

    /// Applies `KC_WSTRUST_*` environment variables to the parser settings.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        self.parser = self.parser.with_overrides(|key| std::env::var(key).ok());
        self
    }
}

/// Output format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per request or response.
    #[default]
    Summary,
    /// Pretty-printed JSON.
    Json,
}
