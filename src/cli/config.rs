//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;

/// Prompt shown by the interactive shell when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed new sessions with sample data
    pub sample_data: Option<bool>,

    /// Interactive shell prompt
    pub prompt: Option<String>,

    /// Default output format
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config;
    /// a missing file given explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    tracing::debug!(path = %default.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/pressbook/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pressbook")
            .join("config.toml")
    }

    /// Whether to seed sample data. The `--sample` flag wins over the file.
    pub fn sample_data(&self, cli_sample: bool) -> bool {
        cli_sample || self.sample_data.unwrap_or(false)
    }

    /// Resolve the output format, with the CLI argument taking precedence.
    pub fn format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}
