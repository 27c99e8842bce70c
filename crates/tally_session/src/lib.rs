//! tally_session — one election: register voters, cast votes, read results.
//!
//! All state (per-candidate counts, registered voters, voters who have cast)
//! lives in private fields and changes only through the methods below.
//!
//! Invariants upheld by every method:
//! - count keys are exactly the non-empty candidate ids given at construction;
//! - a voter is marked as voted only if registered;
//! - the sum of all counts equals the number of voters who have voted.
//!
//! Single-owner: mutation needs `&mut self`. Share across threads behind a mutex.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::debug;

use tally_core::{
    determinism::{first_nonzero_max, sort_results_by_votes},
    CandidateId, CastError, Candidate, Receipt, ResultRecord, Voter, VoterId, MIN_VOTING_AGE,
};

/// A single election over a fixed candidate list.
#[derive(Debug, Clone)]
pub struct ElectionSession {
    candidates: Vec<Candidate>,
    counts: BTreeMap<CandidateId, u64>,
    registered: BTreeSet<VoterId>,
    voted: BTreeSet<VoterId>,
}

impl ElectionSession {
    /// Start a session. Every candidate with a non-empty id gets a zero count;
    /// a repeated id shares a single count.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let counts = candidates
            .iter()
            .filter(|c| !c.id.is_empty())
            .map(|c| (c.id.clone(), 0))
            .collect();
        debug!(candidates = candidates.len(), "election session opened");
        Self { candidates, counts, registered: BTreeSet::new(), voted: BTreeSet::new() }
    }

    /// Session from an untyped candidate list (non-arrays become an empty list).
    pub fn from_value(candidates: &Value) -> Self {
        Self::new(tally_io::candidates_from_value(candidates))
    }

    // ------------------------------------------------------------------ registration

    /// Register `voter`. Returns `false`, leaving state untouched, when the id or
    /// name is empty, the voter is under age, or the id is already registered.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        if !voter.is_eligible(MIN_VOTING_AGE) {
            debug!(voter_id = %voter.id, age = voter.age, "registration refused: ineligible");
            return false;
        }
        let inserted = self.registered.insert(voter.id.clone());
        if inserted {
            debug!(voter_id = %voter.id, "voter registered");
        } else {
            debug!(voter_id = %voter.id, "registration refused: already registered");
        }
        inserted
    }

    /// Register an untyped voter record. Malformed records return `false`.
    pub fn register_voter_value(&mut self, voter: &Value) -> bool {
        match tally_io::voter_from_value(voter) {
            Some(v) => self.register_voter(&v),
            None => {
                debug!("registration refused: malformed voter record");
                false
            }
        }
    }

    // ------------------------------------------------------------------ casting

    /// Record a vote. Checks, first failure wins: registered, candidate known,
    /// not yet voted.
    pub fn cast_vote(&mut self, voter_id: &str, candidate_id: &str) -> Result<Receipt, CastError> {
        if !self.registered.contains(voter_id) {
            debug!(voter_id, candidate_id, "cast refused: voter not registered");
            return Err(CastError::VoterNotRegistered);
        }
        let Some(slot) = self.counts.get_mut(candidate_id) else {
            debug!(voter_id, candidate_id, "cast refused: unknown candidate");
            return Err(CastError::CandidateNotFound);
        };
        if self.voted.contains(voter_id) {
            debug!(voter_id, candidate_id, "cast refused: already voted");
            return Err(CastError::AlreadyVoted);
        }

        *slot += 1;
        self.voted.insert(VoterId::from(voter_id));
        debug!(voter_id, candidate_id, count = *slot, "vote recorded");
        Ok(Receipt { voter_id: voter_id.into(), candidate_id: candidate_id.into() })
    }

    /// Handler form of [`cast_vote`](Self::cast_vote): exactly one handler runs,
    /// inline, and its return value is returned.
    pub fn cast_vote_with<R, S, E>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: S,
        on_error: E,
    ) -> R
    where
        S: FnOnce(Receipt) -> R,
        E: FnOnce(CastError) -> R,
    {
        match self.cast_vote(voter_id, candidate_id) {
            Ok(receipt) => on_success(receipt),
            Err(e) => on_error(e),
        }
    }

    // ------------------------------------------------------------------ results

    /// One record per candidate, most votes first; ties keep candidate order.
    pub fn results(&self) -> Vec<ResultRecord> {
        let mut out = self.records_in_candidate_order();
        sort_results_by_votes(&mut out);
        out
    }

    /// One record per candidate, stably sorted with `cmp`.
    pub fn results_by<F>(&self, cmp: F) -> Vec<ResultRecord>
    where
        F: FnMut(&ResultRecord, &ResultRecord) -> Ordering,
    {
        let mut out = self.records_in_candidate_order();
        out.sort_by(cmp);
        out
    }

    /// Candidate with the most votes, earliest in candidate order on a tie.
    /// `None` when there are no candidates or nobody has received a vote.
    pub fn winner(&self) -> Option<ResultRecord> {
        let records = self.records_in_candidate_order();
        let idx = first_nonzero_max(records.iter().map(|r| r.votes))?;
        records.into_iter().nth(idx)
    }

    fn records_in_candidate_order(&self) -> Vec<ResultRecord> {
        self.candidates
            .iter()
            .map(|c| ResultRecord::from_candidate(c, self.counts.get(&c.id).copied().unwrap_or(0)))
            .collect()
    }

    // ------------------------------------------------------------------ read-only views

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.registered.contains(voter_id)
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voted.contains(voter_id)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of voters who have cast a vote.
    pub fn votes_cast(&self) -> usize {
        self.voted.len()
    }

    /// Sum over the per-candidate counts. Always equals [`votes_cast`](Self::votes_cast).
    pub fn total_votes(&self) -> u64 {
        self.counts.values().sum()
    }
}
