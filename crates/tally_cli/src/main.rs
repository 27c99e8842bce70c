// crates/tally_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, logging, and the
// run path (load scenario → run → write report).

mod args;
mod run;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use args::{parse_and_validate as parse_cli, Args};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Scenario shape / JSON errors
    Validation(String),
    /// Read/write/path errors
    Io(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("tally: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    setup_logging(args.debug);

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("tally: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // RUST_LOG, when set, refines the -d level.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter);
    tracing_subscriber::registry().with(layer).init();
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let scenario = tally_io::load_scenario(&args.scenario).map_err(map_io_err)?;
    let report = run::run_scenario(&scenario, args.sort, args.screen)
        .to_value()
        .map_err(map_io_err)?;

    match &args.out {
        Some(path) => {
            tally_io::write_json_atomic(path, &report).map_err(map_io_err)?;
            if !args.quiet {
                eprintln!("report written to {}", path.display());
            }
        }
        None => {
            let bytes = tally_io::to_pretty_bytes(&report).map_err(map_io_err)?;
            io::stdout()
                .lock()
                .write_all(&bytes)
                .map_err(|e| MainError::Io(format!("stdout: {e}")))?;
        }
    }
    Ok(())
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

/// Translate tally_io::IoError into MainError buckets for exit-code mapping.
fn map_io_err(e: tally_io::IoError) -> MainError {
    use tally_io::IoError::*;
    match e {
        Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        Invalid(m) => MainError::Validation(m),
        Path(m) => MainError::Io(m),
    }
}
