//! `logtally` — summarize syslog, journald and Apache access log files.
//!
//! This library provides the format detection, line parsing and reporting
//! behind the `logtally` CLI. A log is parsed into a [`ParsedLog`] holding
//! every entry plus the ordered subset flagged as errors, and a [`Reporter`]
//! renders counts, an hourly histogram and top-N tables from it.
//!
//! # Example
//!
//! ```
//! use logtally::{Config, LogFormat, Reporter, parse_reader};
//!
//! let input = "Oct 10 13:55:36 host sshd[123]: error: connection reset\n";
//! let log = parse_reader(input.as_bytes(), LogFormat::Syslog).unwrap();
//! assert_eq!(log.error_count(), 1);
//!
//! let mut out = Vec::new();
//! Reporter::new(LogFormat::Syslog, &Config::default(), false)
//!     .write(&log, &mut out)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Total entries: 1"));
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod entry;
pub mod error;
pub mod format;
pub mod freq;
pub mod logging;
pub mod parser;
pub mod report;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::{Config, ReportMode};
pub use detect::{detect_format, detect_lines};
pub use entry::{AccessEntry, LogEntry, ParsedLog, SyslogEntry};
pub use error::LogtallyError;
pub use format::{FormatChoice, LogFormat};
pub use parser::{parse_file, parse_line, parse_reader};
pub use report::Reporter;
