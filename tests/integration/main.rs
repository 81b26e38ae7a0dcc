//! Integration tests driving the `logtally` binary.

mod cli_errors;
mod config_file;
mod detection;
mod syslog_report;

use assert_cmd::Command;

#[allow(deprecated)]
pub fn logtally() -> Command {
    let mut cmd = Command::cargo_bin("logtally").unwrap();
    cmd.arg("--color=never");
    cmd
}
