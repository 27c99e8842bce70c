//! crates/tally_core/src/errors.rs
//! Cast failure reasons. Display text is part of the public contract:
//! callers match on the enum, humans read the string.

use thiserror::Error;

/// Why a cast was refused. Checks run in declaration order; the first failing one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CastError {
    #[error("Voter not registered")]
    VoterNotRegistered,
    #[error("Candidate does not exist")]
    CandidateNotFound,
    #[error("Voter has already voted")]
    AlreadyVoted,
}

impl CastError {
    /// Reason text as handed to an `on_error` handler.
    #[inline]
    pub fn reason(&self) -> &'static str {
        match self {
            CastError::VoterNotRegistered => "Voter not registered",
            CastError::CandidateNotFound => "Candidate does not exist",
            CastError::AlreadyVoted => "Voter has already voted",
        }
    }
}
