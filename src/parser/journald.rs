//! `journalctl` text export parser.
//!
//! The default `journalctl` output is syslog-shaped, so lines are handed to
//! the syslog grammar unchanged. Structured (JSON) exports are not supported.

use crate::entry::LogEntry;
use crate::parser::syslog;

/// Notice printed on the diagnostic stream when a journald parse starts.
pub const SYSLOG_EQUIVALENT_NOTICE: &str = "journald text exports are treated like syslog files";

pub fn parse_line(line: &str) -> Option<LogEntry> {
    syslog::parse_line(line)
}
