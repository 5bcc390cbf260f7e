//! Display configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display settings, loadable from TOML.
///
/// ```toml
/// sort_descending = true
/// json = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Show the move list newest first when a game starts.
    #[serde(default)]
    sort_descending: bool,

    /// Print views as JSON instead of text.
    #[serde(default)]
    json: bool,
}

impl DisplayConfig {
    /// Creates a configuration from explicit values.
    pub fn new(sort_descending: bool, json: bool) -> Self {
        Self {
            sort_descending,
            json,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            sort_descending = config.sort_descending,
            json = config.json,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides; a set flag always wins.
    pub fn with_overrides(mut self, sort_descending: bool, json: bool) -> Self {
        self.sort_descending |= sort_descending;
        self.json |= json;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
