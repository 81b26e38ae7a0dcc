//! Hour-of-day extraction from raw timestamp text.
//!
//! Timestamps are kept as written in the log, so the hour is pulled out with
//! a pattern rather than a full date parse:
//! - syslog: `Oct 10 13:55:36`
//! - apache: `10/Oct/2000:13:55:36 -0700`

use std::sync::LazyLock;

use regex::Regex;

// Word boundary keeps `2000:13:55` from being read as hour 00.
static RE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2}):\d{2}:\d{2}").expect("clock regex is valid")
});

static RE_APACHE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":(\d{2}):\d{2}:\d{2}").expect("apache clock regex is valid")
});

/// Hour (0-23) of a timestamp, or `None` if no clock time is found.
pub fn extract_hour(timestamp: &str) -> Option<u8> {
    let caps = RE_CLOCK
        .captures(timestamp)
        .or_else(|| RE_APACHE_CLOCK.captures(timestamp))?;
    let hour: u8 = caps[1].parse().ok()?;
    (hour < 24).then_some(hour)
}
