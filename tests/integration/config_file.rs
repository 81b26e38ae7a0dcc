//! Optional TOML config file passed with `--config`.

use std::io::Write;

use predicates::prelude::*;

use crate::logtally;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn config_sets_top_and_format() {
    let config = config_file("format = \"apache\"\ntop = 2\n");
    logtally()
        .arg("tests/fixtures/apache.log")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Top 2 IP Addresses ==="))
        .stdout(predicate::str::contains("Detected log format").not());
}

#[test]
fn cli_flags_override_config() {
    let config = config_file("top = 2\n");
    logtally()
        .arg("tests/fixtures/apache.log")
        .arg("--config")
        .arg(config.path())
        .args(["--top", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Top 4 IP Addresses ==="));
}

#[test]
fn config_truncates_error_listing() {
    let config = config_file("[truncate]\nmessage = 6\n");
    logtally()
        .arg("tests/fixtures/syslog.log")
        .arg("--config")
        .arg(config.path())
        .arg("--errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Msg: out of\n"));
}

#[test]
fn unknown_format_in_config_exits_one() {
    let config = config_file("format = \"nginx\"\n");
    logtally()
        .arg("tests/fixtures/syslog.log")
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown log format 'nginx'"));
}

#[test]
fn invalid_toml_exits_one() {
    let config = config_file("top = \"many\"\n");
    logtally()
        .arg("tests/fixtures/syslog.log")
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn missing_config_file_exits_one() {
    logtally()
        .args(["tests/fixtures/syslog.log", "--config", "/nonexistent/logtally.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read config file"));
}
