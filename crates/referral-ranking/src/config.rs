//! Configuration for the Ranking Subsystem

use serde::{Deserialize, Serialize};

/// Ranking configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Visible entries per leaderboard snapshot
    pub top_n: usize,
    /// Reduce display names to "F. Surname" form
    pub anonymize_names: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            anonymize_names: false,
        }
    }
}
