//! Full, summary and errors-only reports for syslog and journald files.

use predicates::prelude::*;

use crate::logtally;

#[test]
fn full_report_sections() {
    logtally()
        .arg("tests/fixtures/syslog.log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing log file: tests/fixtures/syslog.log"))
        .stdout(predicate::str::contains("Detected log format: syslog"))
        .stdout(predicate::str::contains("Total entries: 9"))
        .stdout(predicate::str::contains("Error entries: 3"))
        .stdout(predicate::str::contains("Error rate: 33.33%"))
        .stdout(predicate::str::contains("=== Time Distribution (Hour) ==="))
        .stdout(predicate::str::contains("=== Top 10 Programs/Services ==="))
        .stdout(predicate::str::contains("=== Top 10 Error Messages/Status Codes ==="))
        .stdout(predicate::str::contains("IP Addresses").not());
}

#[test]
fn kernel_error_lands_in_hour_zero_and_error_table() {
    let output = logtally().arg("tests/fixtures/syslog.log").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hour 00:     2 entries"));
    assert!(stdout.contains("  1x: out of memory error"));
}

#[test]
fn hourly_rows_are_ascending() {
    let output = logtally().arg("tests/fixtures/syslog.log").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hours: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Hour "))
        .map(|l| l[..2].to_string())
        .collect();
    assert_eq!(hours, ["00", "06", "09", "12", "17", "23"]);
}

#[test]
fn programs_sorted_by_count_then_first_seen() {
    let output = logtally()
        .args(["tests/fixtures/syslog.log", "--top", "3"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let section = stdout.split("=== Top 3 Programs/Services ===").nth(1).unwrap();
    let programs: Vec<_> = section
        .lines()
        .filter(|l| l.contains(" entries"))
        .take_while(|l| !l.starts_with("==="))
        .map(|l| l.split(':').next().unwrap().trim())
        .collect();
    assert_eq!(programs, ["sshd", "kernel", "systemd"]);
}

#[test]
fn summary_only_stops_after_statistics() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error rate: 33.33%"))
        .stdout(predicate::str::contains("Time Distribution").not())
        .stdout(predicate::str::contains("Programs/Services").not());
}

#[test]
fn errors_only_lists_syslog_fields() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 3 of 3 error entries ==="))
        .stdout(predicate::str::contains(
            "Jan 1 00:00:01 | Host: host | Prog: kernel | Msg: out of memory error",
        ))
        .stdout(predicate::str::contains("Prog: nginx"))
        .stdout(predicate::str::contains("General Statistics").not());
}

#[test]
fn journald_warns_and_parses_like_syslog() {
    logtally()
        .args(["tests/fixtures/journald.log", "--format", "journald"])
        .assert()
        .success()
        .stderr(predicate::str::contains("journald text exports are treated like syslog files"))
        .stdout(predicate::str::contains("Total entries: 4"))
        .stdout(predicate::str::contains("Error entries: 2"))
        .stdout(predicate::str::contains("Error rate: 50.00%"))
        .stdout(predicate::str::contains("NetworkManager"))
        .stdout(predicate::str::contains("Detected log format").not());
}

#[test]
fn journald_notice_stays_off_stdout() {
    logtally()
        .args(["tests/fixtures/journald.log", "--format", "journald"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treated like syslog").not());
}

#[test]
fn empty_file_reports_no_entries_in_every_mode() {
    let cases: [&[&str]; 4] = [&[], &["--summary"], &["--errors"], &["--summary", "--errors"]];
    for flags in cases {
        logtally()
            .arg("tests/fixtures/empty.log")
            .args(flags)
            .assert()
            .success()
            .stdout(predicate::str::contains("No log entries found to analyze."))
            .stdout(predicate::str::contains("General Statistics").not());
    }
}

#[test]
fn verbose_reports_skipped_lines() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--verbose", "--summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping unparsed line"));
}

#[test]
fn skipped_lines_are_silent_by_default() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping").not());
}
