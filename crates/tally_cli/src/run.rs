// crates/tally_cli/src/run.rs
//
// Scenario execution: (screen) → register → cast → results/winner → report.
// Pure with respect to I/O; main.rs does loading and output.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use tally_algo::{count_votes_in_value, create_vote_validator, fold_receipts};
use tally_core::{determinism, Receipt, ResultRecord, Tally};
use tally_io::{IoResult, Scenario};
use tally_session::ElectionSession;

use crate::args::SortKey;

/// Voter record dropped before registration, by position in `voters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenedVoter {
    pub index: usize,
    pub reason: String,
}

/// Cast that the session refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedVote {
    pub voter_id: String,
    pub candidate_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub results: Vec<ResultRecord>,
    pub winner: Option<ResultRecord>,
    pub registered: usize,
    pub refused_registrations: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screened_out: Vec<ScreenedVoter>,
    pub rejected_votes: Vec<RejectedVote>,
    pub tally: Tally,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_votes: Option<i64>,
}

pub fn run_scenario(scenario: &Scenario, sort: SortKey, screen: bool) -> RunReport {
    let mut session = ElectionSession::new(scenario.candidate_list());

    let validator = screen.then(|| {
        let rules = scenario.rules.clone().unwrap_or_else(|| json!({}));
        create_vote_validator(&rules)
    });

    let mut screened_out = Vec::new();
    let mut refused_registrations = Vec::new();
    for (index, voter) in scenario.voters.iter().enumerate() {
        if let Some(check) = validator.as_ref().map(|v| v(voter)) {
            if !check.valid {
                let reason = check.reason.unwrap_or_default();
                debug!(index, %reason, "voter screened out");
                screened_out.push(ScreenedVoter { index, reason });
                continue;
            }
        }
        if !session.register_voter_value(voter) {
            refused_registrations.push(index);
        }
    }

    let mut receipts: Vec<Receipt> = Vec::with_capacity(scenario.votes.len());
    let mut rejected_votes = Vec::new();
    for intent in &scenario.votes {
        session.cast_vote_with(
            &intent.voter_id,
            &intent.candidate_id,
            |r| receipts.push(r),
            |e| {
                warn!(voter_id = %intent.voter_id, candidate_id = %intent.candidate_id, reason = %e, "vote rejected");
                rejected_votes.push(RejectedVote {
                    voter_id: intent.voter_id.clone(),
                    candidate_id: intent.candidate_id.clone(),
                    reason: e.to_string(),
                });
            },
        );
    }

    let results = match sort {
        SortKey::Votes => session.results(),
        SortKey::Name => session.results_by(determinism::cmp_name_asc),
        SortKey::Party => session.results_by(determinism::cmp_party_then_votes),
    };
    let winner = session.winner();
    let region_votes = scenario.regions.as_ref().map(count_votes_in_value);

    info!(
        registered = session.registered_count(),
        votes = session.votes_cast(),
        rejected = rejected_votes.len(),
        winner = winner.as_ref().map(|w| w.id.as_str()).unwrap_or("-"),
        "scenario complete"
    );

    RunReport {
        results,
        winner,
        registered: session.registered_count(),
        refused_registrations,
        screened_out,
        rejected_votes,
        tally: fold_receipts(&receipts),
        region_votes,
    }
}

impl RunReport {
    pub fn to_value(&self) -> IoResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
