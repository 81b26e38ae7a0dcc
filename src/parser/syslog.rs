//! BSD-style syslog text parser.
//!
//! `Mon D HH:MM:SS host program[pid]: message`, with a fallback for bare
//! `Mon D HH:MM:SS kernel: message` lines that carry no hostname. A hostname
//! never ends in `:`, otherwise `kernel:` itself would be taken for one.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{LogEntry, SyslogEntry};

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<timestamp>[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})\s+(?P<hostname>\S*[^\s:])\s+(?P<program>[^\[\s:]+)(?:\[\d+\])?:\s+(?P<message>.*)$",
    )
    .expect("syslog line regex is valid")
});

static RE_KERNEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<timestamp>[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2})\s+kernel:\s*(?P<message>.*)$")
        .expect("kernel line regex is valid")
});

// Whole words only: "errors" and "failed" do not count, "warning" does.
static RE_ERROR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:error|fail|crit|alert|emerg|warn(?:ing)?)\b")
        .expect("error keyword regex is valid")
});

/// Parse one trimmed line. Returns `None` when neither grammar matches.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    if let Some(caps) = RE_LINE.captures(line) {
        return Some(LogEntry::Syslog(SyslogEntry {
            timestamp: caps["timestamp"].to_string(),
            hostname: caps["hostname"].to_string(),
            program: caps["program"].to_string(),
            message: caps["message"].to_string(),
        }));
    }

    let caps = RE_KERNEL.captures(line)?;
    Some(LogEntry::Syslog(SyslogEntry {
        timestamp: caps["timestamp"].to_string(),
        hostname: "localhost".to_string(),
        program: "kernel".to_string(),
        message: caps["message"].to_string(),
    }))
}

/// Whether a message mentions one of the error keywords as a whole word.
pub fn is_error_message(message: &str) -> bool {
    RE_ERROR_WORD.is_match(message)
}
