//! tally_core — Core types, ids, ordering helpers and error enums for the tally engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! workspace (`tally_algo`, `tally_session`, `tally_io`, `tally_cli`).
//!
//! - Ids: `VoterId`, `CandidateId`
//! - Entities: `Candidate`, `Voter`, `ResultRecord`, `Receipt`, `RegionNode`, `Tally`
//! - Cast failures: `CastError`
//! - Ordering helpers for result views and winner scans
//!
//! Serialization derives are gated behind the `serde` feature (on by default).

#![forbid(unsafe_code)]

pub mod determinism;
pub mod entities;
pub mod errors;
pub mod ids;

pub use entities::{Candidate, Receipt, RegionNode, ResultRecord, Tally, Voter, MIN_VOTING_AGE};
pub use errors::CastError;
pub use ids::{CandidateId, VoterId};
