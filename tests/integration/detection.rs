//! Format auto-detection through the binary.

use std::io::Write;

use predicates::prelude::*;

use crate::logtally;

#[test]
fn dotted_quad_file_is_apache() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 0..10 {
        writeln!(
            file,
            r#"10.0.0.{i} - - [01/Jan/2024:08:00:0{i} +0000] "GET /{i} HTTP/1.1" 200 {i}"#
        )
        .unwrap();
    }
    file.flush().unwrap();

    logtally()
        .arg(file.path())
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected log format: apache"))
        .stdout(predicate::str::contains("Total entries: 10"));
}

#[test]
fn unrecognized_file_falls_back_to_syslog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hello world").unwrap();
    writeln!(file, "nothing to see").unwrap();
    file.flush().unwrap();

    logtally()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected log format: syslog"))
        .stdout(predicate::str::contains("No log entries found to analyze."));
}

#[test]
fn explicit_format_skips_detection() {
    logtally()
        .args(["tests/fixtures/apache.log", "--format", "apache", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected log format").not())
        .stdout(predicate::str::contains("Total entries: 5"));
}
