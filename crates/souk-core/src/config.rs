// Rust guideline compliant 2026-08-14

//! Configuration management for Souk.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Souk behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether terminal transaction statuses reject further transitions.
    #[serde(default)]
    pub strict_transitions: bool,

    /// ISO 4217 currency code used when displaying amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Default display currency.
fn default_currency() -> String {
    "CAD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict_transitions: false,
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.souk/config.toml`
    /// 3. Environment variables with `SOUK_` prefix
    ///
    /// # Arguments
    ///
    /// * `souk_dir` - Path to the `.souk` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(souk_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = souk_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SOUK_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `SOUK_STRICT_TRANSITIONS` - Freeze terminal statuses (true/false)
    /// - `SOUK_CURRENCY` - Display currency code
    ///
    /// # Returns
    ///
    /// Ok if all environment variables are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SOUK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "SOUK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("SOUK_STRICT_TRANSITIONS") {
            self.strict_transitions = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "SOUK_STRICT_TRANSITIONS must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("SOUK_CURRENCY") {
            self.currency = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Returns
    ///
    /// Ok if all values are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is not a three-letter uppercase code.
    fn validate(&self) -> Result<()> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(crate::Error::InvalidConfig(format!(
                "currency must be a three-letter uppercase code, got {}",
                self.currency
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `souk_dir` - Path to the `.souk` directory
    ///
    /// # Returns
    ///
    /// Ok if the file was written successfully, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, souk_dir: &Path) -> Result<()> {
        let config_path = souk_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
