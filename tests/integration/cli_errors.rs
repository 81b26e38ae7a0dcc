//! Fatal argument errors and their exit codes.

use predicates::prelude::*;

use crate::logtally;

#[test]
fn missing_file_exits_one() {
    logtally()
        .arg("tests/fixtures/does-not-exist.log")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("was not found or is not a file"));
}

#[test]
fn directory_argument_exits_one() {
    logtally()
        .arg("tests/fixtures")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn no_arguments_is_usage_error() {
    logtally().assert().failure();
}

#[test]
fn unknown_format_flag_is_rejected() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--format", "nginx"])
        .assert()
        .failure()
        .stdout("");
}
