//! Application settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings.
///
/// Every field has a default, so an empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File that receives tracing output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Title shown at the top of the screen.
    #[serde(default = "default_title")]
    title: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            title: default_title(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(log_file = %settings.log_file.display(), "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Replaces the log filter directive.
    pub fn with_log_filter(mut self, log_filter: String) -> Self {
        self.log_filter = log_filter;
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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
