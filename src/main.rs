use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use logtally::cli::{Cli, ColorMode};
use logtally::config::Config;
use logtally::error::LogtallyError;
use logtally::format::LogFormat;
use logtally::report::Reporter;
use logtally::{detect, logging, parser};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `logtally ... | head` ends quietly.
    reset_sigpipe();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LogtallyError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("logtally: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), LogtallyError> {
    let config = Config::from_cli(cli)?;

    let path = cli.log_file.as_path();
    if !path.is_file() {
        return Err(LogtallyError::NotAFile(path.to_path_buf()));
    }

    let use_color = resolve_color_mode(config.color_mode);
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    writeln!(writer, "Analyzing log file: {}", path.display())?;

    let format = match config.format.fixed() {
        Some(format) => format,
        None => match detect::detect_format(path) {
            Some(detected) => {
                writeln!(writer, "Detected log format: {detected}")?;
                detected
            }
            None => {
                tracing::warn!("could not detect the log format, trying syslog");
                LogFormat::Syslog
            }
        },
    };

    let log = parser::parse_file(path, format)?;
    tracing::debug!(entries = log.len(), errors = log.error_count(), %format, "parsed log file");

    Reporter::new(format, &config, use_color).write(&log, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if !io::stdout().is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            !std::env::var("TERM").is_ok_and(|v| v == "dumb")
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// Restoring `SIG_DFL` lets a closed downstream pipe end the process without
/// an error message.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
