//! Line parsers for the supported log formats.
//!
//! Each grammar is a pure `&str -> Option<LogEntry>` function. [`parse_reader`]
//! runs one over a stream of lines, drops lines that do not match and
//! classifies the rest, and [`parse_file`] does the same for a path.

pub mod apache;
pub mod journald;
pub mod syslog;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::entry::{LogEntry, ParsedLog};
use crate::format::LogFormat;

/// Parse a single line with the grammar for `format`.
///
/// The line is trimmed first; blank lines yield `None`.
pub fn parse_line(line: &str, format: LogFormat) -> Option<LogEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match format {
        LogFormat::Syslog => syslog::parse_line(line),
        LogFormat::Journald => journald::parse_line(line),
        LogFormat::Apache => apache::parse_line(line),
    }
}

/// Format-specific error predicate.
pub fn is_error(entry: &LogEntry) -> bool {
    match entry {
        LogEntry::Syslog(e) => syslog::is_error_message(&e.message),
        LogEntry::Access(e) => apache::is_error_status(&e.status),
    }
}

/// Parse every line of `reader`.
///
/// Invalid UTF-8 is replaced rather than rejected, so a stray binary byte
/// does not cost the whole line.
pub fn parse_reader<R: BufRead>(mut reader: R, format: LogFormat) -> io::Result<ParsedLog> {
    if format == LogFormat::Journald {
        tracing::warn!("{}", journald::SYSLOG_EQUIVALENT_NOTICE);
    }

    let mut log = ParsedLog::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line, format) {
            Some(entry) => {
                let error = is_error(&entry);
                log.push(entry, error);
            }
            None => tracing::debug!(line_number, %format, "skipping unparsed line"),
        }
    }

    tracing::debug!(
        entries = log.len(),
        errors = log.error_count(),
        lines = line_number,
        "finished parsing"
    );
    Ok(log)
}

/// Open `path` and parse it with the grammar for `format`.
pub fn parse_file(path: &Path, format: LogFormat) -> io::Result<ParsedLog> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), format)
}
