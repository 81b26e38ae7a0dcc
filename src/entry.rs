//! Parsed log records.

use std::borrow::Cow;

/// A line parsed by the syslog (or journald) grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyslogEntry {
    /// `Mon D HH:MM:SS`, exactly as written in the file.
    pub timestamp: String,
    pub hostname: String,
    /// Program or service name with any `[pid]` suffix removed.
    pub program: String,
    pub message: String,
}

/// A line parsed by the Apache access log grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEntry {
    pub ip: String,
    /// Contents of the bracketed `DD/Mon/YYYY:HH:MM:SS zone` field.
    pub timestamp: String,
    pub request: String,
    /// Three-digit HTTP status code.
    pub status: String,
    /// Response size in bytes; `-` is stored as 0.
    pub size: u64,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

/// One successfully parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Syslog(SyslogEntry),
    Access(AccessEntry),
}

impl LogEntry {
    pub fn timestamp(&self) -> &str {
        match self {
            Self::Syslog(e) => &e.timestamp,
            Self::Access(e) => &e.timestamp,
        }
    }

    pub fn program(&self) -> Option<&str> {
        match self {
            Self::Syslog(e) => Some(&e.program),
            Self::Access(_) => None,
        }
    }

    /// Look up a field by its name, as if the entry were a string map.
    ///
    /// Unset optional fields and names foreign to the entry's format yield
    /// `None`.
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self {
            Self::Syslog(e) => match name {
                "timestamp" => Some(Cow::Borrowed(&e.timestamp)),
                "hostname" => Some(Cow::Borrowed(&e.hostname)),
                "program" => Some(Cow::Borrowed(&e.program)),
                "message" => Some(Cow::Borrowed(&e.message)),
                _ => None,
            },
            Self::Access(e) => match name {
                "ip" => Some(Cow::Borrowed(&e.ip)),
                "timestamp" => Some(Cow::Borrowed(&e.timestamp)),
                "request" => Some(Cow::Borrowed(&e.request)),
                "status" => Some(Cow::Borrowed(&e.status)),
                "size" => Some(Cow::Owned(e.size.to_string())),
                "referer" => e.referer.as_deref().map(Cow::Borrowed),
                "user_agent" => e.user_agent.as_deref().map(Cow::Borrowed),
                _ => None,
            },
        }
    }
}

/// All entries of one file plus the ordered subset flagged as errors.
///
/// Error entries are stored as indices into [`entries`](Self::entries), so
/// the error sequence is always an in-order subsequence of the full one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    entries: Vec<LogEntry>,
    error_indices: Vec<usize>,
}

impl ParsedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, recording it as an error when `is_error` is set.
    pub fn push(&mut self, entry: LogEntry, is_error: bool) {
        if is_error {
            self.error_indices.push(self.entries.len());
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn errors(&self) -> impl ExactSizeIterator<Item = &LogEntry> + '_ {
        self.error_indices.iter().map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_indices.len()
    }

    /// Share of error entries in percent; 0 when there are no entries.
    #[allow(clippy::cast_precision_loss)]
    pub fn error_percentage(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.error_indices.len() as f64 / self.entries.len() as f64 * 100.0
    }
}
