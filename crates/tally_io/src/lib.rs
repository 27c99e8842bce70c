//! crates/tally_io/src/lib.rs
//! JSON boundary for the tally engine.
//!
//! - Lenient coercion of untyped records into core types (`coerce`).
//! - Scenario files: candidates, voters, votes, optional rules and regions (`scenario`).
//! - Atomic JSON report writing (`report`).
//! - Shared error type (`IoError`) with `From` conversions used across modules.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for tally_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (read, create_dir_all, rename, ...).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors with an optional JSON Pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Generic validation / invariants.
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps line/column, not a pointer; report against the root.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}

pub mod coerce;
pub mod report;
pub mod scenario;

pub use coerce::{candidates_from_value, region_from_value, tally_from_value, voter_from_value};
pub use report::{to_pretty_bytes, write_json_atomic};
pub use scenario::{load_scenario, parse_scenario, Scenario, VoteIntent};

/// Returns true if `s` looks like a URL: any `<scheme>://`, or a bare
/// `http:` / `https:` / `file:` prefix (case-insensitive).
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://")
        || ["http:", "https:", "file:"].iter().any(|p| lower.starts_with(p))
}

pub mod prelude {
    pub use crate::{IoError, IoResult, looks_like_url_strict};
    pub use crate::coerce::{candidates_from_value, region_from_value, tally_from_value, voter_from_value};
    pub use crate::report::write_json_atomic;
    pub use crate::scenario::{load_scenario, Scenario, VoteIntent};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection_covers_bare_schemes() {
        assert!(looks_like_url_strict("https://x/y.json"));
        assert!(looks_like_url_strict("  s3://bucket/key"));
        assert!(looks_like_url_strict("FILE:/tmp/x"));
        assert!(looks_like_url_strict("http:scenario.json"));
        assert!(!looks_like_url_strict("/tmp/x.json"));
        assert!(!looks_like_url_strict("relative/x.json"));
        assert!(!looks_like_url_strict("files/x.json"));
    }
}
