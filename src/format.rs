//! Supported log formats and the format selector accepted on the command line.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::LogtallyError;

/// A concrete line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// BSD-style syslog text (`Mon D HH:MM:SS host prog[pid]: msg`).
    Syslog,
    /// `journalctl` text export, parsed with the syslog grammar.
    Journald,
    /// Apache Common/Combined access log.
    Apache,
}

impl LogFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Syslog => "syslog",
            Self::Journald => "journald",
            Self::Apache => "apache",
        }
    }

    /// Whether entries of this format carry hostname/program/message fields.
    pub const fn is_syslog_like(self) -> bool {
        matches!(self, Self::Syslog | Self::Journald)
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format selector: a fixed grammar or `auto` for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatChoice {
    Syslog,
    Journald,
    Apache,
    /// Guess the grammar from the first lines of the file.
    #[default]
    Auto,
}

impl FormatChoice {
    /// The fixed format, or `None` for [`Auto`](Self::Auto).
    pub const fn fixed(self) -> Option<LogFormat> {
        match self {
            Self::Syslog => Some(LogFormat::Syslog),
            Self::Journald => Some(LogFormat::Journald),
            Self::Apache => Some(LogFormat::Apache),
            Self::Auto => None,
        }
    }
}

impl FromStr for FormatChoice {
    type Err = LogtallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "syslog" => Ok(Self::Syslog),
            "journald" => Ok(Self::Journald),
            "apache" => Ok(Self::Apache),
            "auto" => Ok(Self::Auto),
            _ => Err(LogtallyError::UnknownFormat(s.to_string())),
        }
    }
}
