//! Error types for the Ranking Subsystem
//!
//! This component is read-only; the only failure it reports is "leaderboard
//! unavailable". A partial ranking is never produced.

use shared_types::StoreError;
use thiserror::Error;

/// All errors that can occur while building a leaderboard
#[derive(Debug, Error)]
pub enum RankingError {
    /// Data access failed or the policy is unusable; nothing is ranked.
    #[error("Leaderboard unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for RankingError {
    fn from(err: StoreError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
