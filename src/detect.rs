//! Format auto-detection from the first lines of a file.
//!
//! The heuristic only distinguishes apache from syslog. Ties and files that
//! match neither signature fall back to syslog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::format::LogFormat;

/// Number of non-empty lines sampled.
pub const SAMPLE_LINES: usize = 10;

static RE_APACHE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("dotted-quad regex is valid")
});

static RE_SYSLOG_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}").expect("syslog timestamp regex is valid")
});

/// Guess the format of the file at `path`.
///
/// Returns `None` only when the file cannot be opened or read, leaving the
/// fallback to the caller.
pub fn detect_format(path: &Path) -> Option<LogFormat> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot open file for detection");
            return None;
        }
    };

    let mut sample = Vec::with_capacity(SAMPLE_LINES);
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    while sample.len() < SAMPLE_LINES {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if !line.trim().is_empty() {
                    sample.push(line.into_owned());
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "read failed during detection");
                return None;
            }
        }
    }

    Some(detect_lines(sample.iter().map(String::as_str)))
}

/// Apply the detection heuristic to in-memory lines.
///
/// Blank lines are skipped and at most [`SAMPLE_LINES`] non-empty lines are
/// considered.
pub fn detect_lines<'a, I>(lines: I) -> LogFormat
where
    I: IntoIterator<Item = &'a str>,
{
    let mut apache_matches = 0usize;
    let mut syslog_matches = 0usize;

    for line in lines
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
    {
        if RE_APACHE_START.is_match(line) {
            apache_matches += 1;
        }
        if RE_SYSLOG_START.is_match(line) {
            syslog_matches += 1;
        }
    }

    tracing::debug!(apache_matches, syslog_matches, "format detection sample");

    if apache_matches > syslog_matches && apache_matches > 0 {
        LogFormat::Apache
    } else {
        LogFormat::Syslog
    }
}
