//! Aggregation and text reporting for a parsed log.
//!
//! The reporter writes one of three views to any [`Write`] sink:
//! - errors-only: the first N error entries
//! - summary-only: entry and error counts
//! - full: the summary, an hourly histogram and the top-N tables
//!
//! All tallies are local to a single [`Reporter::write`] call.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::config::{Config, ReportMode, TruncateWidths};
use crate::entry::{LogEntry, ParsedLog};
use crate::format::LogFormat;
use crate::freq::FrequencyTable;
use crate::timestamp;

/// Notice printed when a file yields no entries at all.
pub const NO_ENTRIES: &str = "No log entries found to analyze.";
/// Notice printed by errors-only mode when nothing was flagged.
pub const NO_ERRORS: &str = "No error entries found.";

/// Renders reports for one log format with fixed settings.
#[derive(Debug, Clone)]
pub struct Reporter {
    pub format: LogFormat,
    pub mode: ReportMode,
    pub top: usize,
    pub truncate: TruncateWidths,
    pub use_color: bool,
}

impl Reporter {
    pub fn new(format: LogFormat, config: &Config, use_color: bool) -> Self {
        Self {
            format,
            mode: config.mode,
            top: config.top,
            truncate: config.truncate,
            use_color,
        }
    }

    /// Write the report for `log` in the configured mode.
    pub fn write<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        if log.is_empty() {
            writeln!(out, "{NO_ENTRIES}")?;
            return Ok(());
        }

        match self.mode {
            ReportMode::Errors => self.write_error_entries(log, out),
            ReportMode::Summary => self.write_summary(log, out),
            ReportMode::Full => {
                self.write_summary(log, out)?;
                self.write_hourly(log, out)?;
                if self.format.is_syslog_like() {
                    self.write_top_programs(log, out)?;
                }
                if log.error_count() > 0 {
                    self.write_top_errors(log, out)?;
                }
                if self.format == LogFormat::Apache {
                    self.write_top_ips(log, out)?;
                    self.write_status_distribution(log, out)?;
                }
                Ok(())
            }
        }
    }

    fn heading<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        let title = format!("=== {title} ===");
        if self.use_color {
            writeln!(out, "\n{}", title.bold())
        } else {
            writeln!(out, "\n{title}")
        }
    }

    fn write_error_entries<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        let total = log.error_count();
        if total == 0 {
            writeln!(out, "{NO_ERRORS}")?;
            return Ok(());
        }

        let shown = total.min(self.top);
        self.heading(out, &format!("{shown} of {total} error entries"))?;
        for entry in log.errors().take(self.top) {
            match entry {
                LogEntry::Access(e) => writeln!(
                    out,
                    "{} | IP: {} | Status: {} | Request: {}",
                    e.timestamp,
                    e.ip,
                    e.status,
                    truncate_chars(&e.request, self.truncate.request)
                )?,
                LogEntry::Syslog(e) => writeln!(
                    out,
                    "{} | Host: {} | Prog: {} | Msg: {}",
                    e.timestamp,
                    e.hostname,
                    e.program,
                    truncate_chars(&e.message, self.truncate.message)
                )?,
            }
        }
        Ok(())
    }

    fn write_summary<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        self.heading(out, "General Statistics")?;
        writeln!(out, "Total entries: {}", log.len())?;
        writeln!(out, "Error entries: {}", log.error_count())?;
        writeln!(out, "Error rate: {:.2}%", log.error_percentage())
    }

    fn write_hourly<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        self.heading(out, "Time Distribution (Hour)")?;

        let mut hours = [0usize; 24];
        let mut any = false;
        for hour in log.entries().iter().filter_map(|e| timestamp::extract_hour(e.timestamp())) {
            hours[usize::from(hour)] += 1;
            any = true;
        }

        if !any {
            return writeln!(out, "No timestamps found for hourly distribution.");
        }
        for (hour, count) in hours.iter().enumerate().filter(|(_, c)| **c > 0) {
            writeln!(out, "Hour {hour:02}: {count:>5} entries")?;
        }
        Ok(())
    }

    fn write_top_programs<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        let programs: FrequencyTable<&str> = log.entries().iter().filter_map(LogEntry::program).collect();
        if programs.is_empty() {
            return Ok(());
        }

        self.heading(out, &format!("Top {} Programs/Services", self.top))?;
        for (program, count) in programs.most_common(self.top) {
            writeln!(out, "{program:<30}: {count:>5} entries")?;
        }
        Ok(())
    }

    fn write_top_errors<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        self.heading(out, &format!("Top {} Error Messages/Status Codes", self.top))?;

        if self.format == LogFormat::Apache {
            let statuses: FrequencyTable<&str> = log
                .errors()
                .filter_map(|e| match e {
                    LogEntry::Access(a) => Some(a.status.as_str()),
                    LogEntry::Syslog(_) => None,
                })
                .collect();
            writeln!(out, "  --- By status code ---")?;
            for (status, count) in statuses.most_common(self.top) {
                writeln!(out, "  Status {status}: {count:>5} times")?;
            }
        } else {
            let messages: FrequencyTable<&str> = log
                .errors()
                .filter_map(|e| match e {
                    LogEntry::Syslog(s) => Some(s.message.as_str()),
                    LogEntry::Access(_) => None,
                })
                .collect();
            let limit = self.truncate.error_message;
            for (message, count) in messages.most_common(self.top) {
                let shown = truncate_chars(message, limit);
                let ellipsis = if shown.len() < message.len() { "..." } else { "" };
                writeln!(out, "{count:>3}x: {shown}{ellipsis}")?;
            }
        }
        Ok(())
    }

    fn write_top_ips<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        let ips: FrequencyTable<&str> = access_field(log, |a| a.ip.as_str());
        self.heading(out, &format!("Top {} IP Addresses", self.top))?;
        for (ip, count) in ips.most_common(self.top) {
            writeln!(out, "{ip:<20}: {count:>5} requests")?;
        }
        Ok(())
    }

    fn write_status_distribution<W: Write>(&self, log: &ParsedLog, out: &mut W) -> io::Result<()> {
        let statuses: FrequencyTable<&str> = access_field(log, |a| a.status.as_str());
        self.heading(out, "HTTP Status Code Distribution")?;
        for (status, count) in statuses.sorted_by_key() {
            writeln!(out, "Status {status}: {count:>5} requests")?;
        }
        Ok(())
    }
}

fn access_field<'a>(
    log: &'a ParsedLog,
    field: impl Fn(&'a crate::entry::AccessEntry) -> &'a str,
) -> FrequencyTable<&'a str> {
    log.entries()
        .iter()
        .filter_map(|e| match e {
            LogEntry::Access(a) => Some(field(a)),
            LogEntry::Syslog(_) => None,
        })
        .collect()
}

/// The first `max_chars` characters of `s`.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
