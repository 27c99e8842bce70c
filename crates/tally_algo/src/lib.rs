// crates/tally_algo/src/lib.rs
#![forbid(unsafe_code)]

// Core types the utilities operate on
pub use tally_core::{Receipt, RegionNode, Tally};

// ----------------------------- Utilities (public surface) ----------------------------

// File modules (actual implementations)
pub mod eligibility;
pub mod regions;
pub mod tally;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use eligibility::{create_vote_validator, ValidationRules, VoteValidator, VoterCheck};
pub use regions::{count_votes_in_regions, count_votes_in_value};
pub use tally::{fold_receipts, tally_pure, tally_pure_value};
