//! Command-line argument definitions for `logtally`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::FormatChoice;

/// Summarize a syslog, journald or Apache access log file.
///
/// Parses the file, flags error entries and prints counts, an hourly
/// distribution and top-N tables to stdout.
#[derive(Debug, Parser)]
#[command(name = "logtally", version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file to analyze.
    pub log_file: PathBuf,

    /// Log file format.
    ///
    /// `auto` guesses between apache and syslog from the first lines.
    /// Defaults to `auto`.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatChoice>,

    /// Number of rows shown in every top-N table. Defaults to 10.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Only print the general statistics.
    #[arg(short = 's', long)]
    pub summary: bool,

    /// Only print detected error entries.
    ///
    /// Takes precedence over `--summary`.
    #[arg(short = 'e', long)]
    pub errors: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Path to an optional TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report skipped lines and other debug diagnostics on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    #[default]
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
