//! crates/tally_core/src/entities.rs
//! Entities shared by the session, the utilities and the JSON boundary.
//! Wire names are camelCase (`voterId`, `subRegions`, ...).

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CandidateId, VoterId};

/// Registration age floor used by `ElectionSession::register_voter`.
pub const MIN_VOTING_AGE: u32 = 18;

/// Plain candidate-id → count mapping, treated as an immutable value by `tally_pure`.
pub type Tally = BTreeMap<String, u64>;

/// A candidate on the ballot. Fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), party: party.into() }
    }
}

/// A voter as submitted for registration. Only `id` survives registration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Voter {
    pub id: VoterId,
    pub name: String,
    pub age: u32,
}

impl Voter {
    pub fn new(id: impl Into<VoterId>, name: impl Into<String>, age: u32) -> Self {
        Self { id: id.into(), name: name.into(), age }
    }

    /// Id and name present, age at or above `min_age`.
    #[inline]
    pub fn is_eligible(&self, min_age: u32) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && self.age >= min_age
    }
}

/// Candidate joined with its current count. Derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultRecord {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl ResultRecord {
    pub fn from_candidate(c: &Candidate, votes: u64) -> Self {
        Self { id: c.id.clone(), name: c.name.clone(), party: c.party.clone(), votes }
    }
}

/// Confirmation payload for a recorded vote.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Receipt {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

/// One node of an externally supplied region hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RegionNode {
    pub name: String,
    pub votes: i64,
    pub sub_regions: Vec<RegionNode>,
}

impl RegionNode {
    pub fn leaf(name: impl Into<String>, votes: i64) -> Self {
        Self { name: name.into(), votes, sub_regions: Vec::new() }
    }

    pub fn with_children(name: impl Into<String>, votes: i64, sub_regions: Vec<RegionNode>) -> Self {
        Self { name: name.into(), votes, sub_regions }
    }
}
