//! Configuration management with optional TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file, only when passed with `--config`
//! 3. Built-in defaults

use std::path::Path;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LogtallyError;
use crate::format::FormatChoice;

/// Which sections the reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Summary block, hourly histogram and all top-N tables.
    #[default]
    Full,
    /// Summary block only.
    Summary,
    /// Error entry listing only.
    Errors,
}

/// Character limits applied when echoing free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateWidths {
    /// Apache request line in the error listing.
    pub request: usize,
    /// Syslog message in the error listing.
    pub message: usize,
    /// Message in the top error messages table (longer ones get `...`).
    pub error_message: usize,
}

impl Default for TruncateWidths {
    fn default() -> Self {
        Self {
            request: 80,
            message: 100,
            error_message: 120,
        }
    }
}

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    pub format: FormatChoice,
    /// Row cap for every top-N table.
    pub top: usize,
    pub mode: ReportMode,
    pub color_mode: ColorMode,
    pub verbose: bool,
    pub truncate: TruncateWidths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: FormatChoice::Auto,
            top: 10,
            mode: ReportMode::Full,
            color_mode: ColorMode::Auto,
            verbose: false,
            truncate: TruncateWidths::default(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if given.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, LogtallyError> {
        let mut config = Self::default();

        if let Some(ref path) = cli.config {
            let file_config = FileConfig::load(path)?;
            config.apply_file_config(file_config)?;
        }

        if let Some(format) = cli.format {
            config.format = format;
        }
        if let Some(top) = cli.top {
            config.top = top;
        }
        if let Some(color) = cli.color {
            config.color_mode = color;
        }

        config.mode = if cli.errors {
            ReportMode::Errors
        } else if cli.summary {
            ReportMode::Summary
        } else {
            ReportMode::Full
        };
        config.verbose = cli.verbose;

        Ok(config)
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), LogtallyError> {
        if let Some(format) = file.format {
            self.format = format.parse()?;
        }

        if let Some(top) = file.top {
            self.top = top;
        }

        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                "auto" => ColorMode::Auto,
                other => {
                    return Err(LogtallyError::Config(format!(
                        "invalid color '{other}': expected one of auto, always, never"
                    )));
                }
            };
        }

        if let Some(widths) = file.truncate {
            if let Some(request) = widths.request {
                self.truncate.request = request;
            }
            if let Some(message) = widths.message {
                self.truncate.message = message;
            }
            if let Some(error_message) = widths.error_message {
                self.truncate.error_message = error_message;
            }
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    format: Option<String>,
    top: Option<usize>,
    color: Option<String>,
    truncate: Option<TruncateConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TruncateConfig {
    request: Option<usize>,
    message: Option<usize>,
    error_message: Option<usize>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LogtallyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogtallyError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
