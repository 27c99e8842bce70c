// crates/tally_cli/src/args.rs
//
// Offline CLI argument surface.
// - One scenario file in, one JSON report out (stdout or --out).
// - No networked paths (reject any scheme:// like http/https/file).

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tally_io::looks_like_url_strict;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tally",
    version,
    disable_help_subcommand = true,
    about = "Run an election scenario through the tally engine"
)]
pub struct Args {
    /// Scenario JSON path (candidates, voters, votes, optional rules/regions).
    #[arg(long)]
    pub scenario: PathBuf,

    /// Ordering of the `results` array.
    #[arg(long, value_enum, default_value_t = SortKey::Votes)]
    pub sort: SortKey,

    /// Screen voters with the scenario's `rules` before registering them.
    #[arg(long)]
    pub screen: bool,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Debug verbosity: -d info, -dd debug, -ddd trace (logs go to stderr).
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Suppress non-essential stderr messages.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Most votes first; ties keep candidate order.
    Votes,
    /// Candidate name ascending.
    Name,
    /// Party ascending, then most votes first.
    Party,
}

/// Errors surfaced by argument validation.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Reject any explicit URI scheme (e.g., http://, https://, file:).
#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    match p.to_str() {
        Some(s) if looks_like_url_strict(s) => Err(CliError::NonLocalPath(s.to_string())),
        _ => Ok(()),
    }
}

/// Parse from the process arguments, then apply path checks.
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

pub fn validate(args: Args) -> Result<Args, CliError> {
    ensure_local_path(&args.scenario)?;
    if let Some(out) = &args.out {
        ensure_local_path(out)?;
    }
    if !args.scenario.is_file() {
        return Err(CliError::NotFound(args.scenario.display().to_string()));
    }
    Ok(args)
}
