//! Scenario files: one local JSON document describing an election run.
//!
//! ```json
//! {
//!   "candidates": [{"id": "C1", "name": "Alice", "party": "Blue"}],
//!   "voters":     [{"id": "V1", "name": "Ann", "age": 25}],
//!   "votes":      [{"voterId": "V1", "candidateId": "C1"}],
//!   "rules":      {"minAge": 21},
//!   "regions":    {"name": "North", "votes": 3, "subRegions": []}
//! }
//! ```
//!
//! `candidates`, `voters`, `rules` and `regions` stay untyped so that the
//! lenient coercions in `coerce` decide what is usable. No network paths.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use tally_core::Candidate;

use crate::{coerce, looks_like_url_strict, IoError, IoResult};

/// One requested cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteIntent {
    pub voter_id: String,
    pub candidate_id: String,
}

/// Parsed scenario document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub candidates: Value,
    pub voters: Vec<Value>,
    pub votes: Vec<VoteIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Value>,
}

impl Scenario {
    /// Candidate list after lenient coercion.
    pub fn candidate_list(&self) -> Vec<Candidate> {
        coerce::candidates_from_value(&self.candidates)
    }
}

/// Parse a scenario from JSON text. The root must be an object.
pub fn parse_scenario(text: &str) -> IoResult<Scenario> {
    let root: Value = serde_json::from_str(text)?;
    if !root.is_object() {
        return Err(IoError::Invalid("scenario root must be a JSON object".into()));
    }
    Ok(serde_json::from_value(root)?)
}

/// Read and parse a local scenario file.
pub fn load_scenario(path: &Path) -> IoResult<Scenario> {
    if let Some(s) = path.to_str() {
        if looks_like_url_strict(s) {
            return Err(IoError::Path(format!("path must be local file (no scheme): {s}")));
        }
    }
    let text = fs::read_to_string(path)
        .map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let scenario = parse_scenario(&text)?;
    debug!(
        path = %path.display(),
        voters = scenario.voters.len(),
        votes = scenario.votes.len(),
        "scenario loaded"
    );
    Ok(scenario)
}
