//! Error types for the `logtally` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in `logtally`.
///
/// Maps to exit codes via [`exit_code`](Self::exit_code): everything caused
/// by bad input or configuration exits 1, I/O failures while reading the log
/// or writing the report exit 2.
#[derive(Debug, Error)]
pub enum LogtallyError {
    /// The log file argument does not name a regular file.
    #[error("the log file '{}' was not found or is not a file", .0.display())]
    NotAFile(PathBuf),

    /// A format selector that none of the parsers understand.
    #[error("unknown log format '{0}': expected one of syslog, journald, apache, auto")]
    UnknownFormat(String),

    /// Configuration error (unreadable config file, bad value).
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogtallyError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotAFile(_) | Self::UnknownFormat(_) | Self::Config(_) | Self::Toml(_) => 1,
            Self::Io(_) => 2,
        }
    }
}
