//! Apache access log parser (Common and Combined Log Format).
//!
//! `%h %l %u %t "%r" %>s %b` optionally followed by `"%{Referer}i" "%{User-agent}i"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{AccessEntry, LogEntry};

static RE_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<ip>\S+)\s+",
        r"\S+\s+",
        r"\S+\s+",
        r"\[(?P<timestamp>[^\]]+)\]\s+",
        r#""(?P<request>[^"]*)"\s+"#,
        r"(?P<status>\d{3})\s+",
        r"(?P<size>\S+)",
        r#"(?:\s+"(?P<referer>[^"]*)"\s+"(?P<user_agent>[^"]*)")?"#,
    ))
    .expect("access log regex is valid")
});

/// Parse one trimmed line.
///
/// Returns `None` when the grammar does not match or the size column is
/// neither `-` nor an unsigned integer.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let caps = RE_ACCESS.captures(line)?;
    let size = parse_size(&caps["size"])?;

    Some(LogEntry::Access(AccessEntry {
        ip: caps["ip"].to_string(),
        timestamp: caps["timestamp"].to_string(),
        request: caps["request"].to_string(),
        status: caps["status"].to_string(),
        size,
        referer: caps.name("referer").map(|m| m.as_str().to_string()),
        user_agent: caps.name("user_agent").map(|m| m.as_str().to_string()),
    }))
}

fn parse_size(raw: &str) -> Option<u64> {
    if raw == "-" {
        return Some(0);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// 4xx and 5xx responses count as errors.
pub fn is_error_status(status: &str) -> bool {
    status.starts_with(['4', '5'])
}
