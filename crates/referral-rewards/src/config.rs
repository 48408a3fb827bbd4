//! Configuration for the Rewards Subsystem

use serde::{Deserialize, Serialize};

/// Policy cache configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolicyCacheConfig {
    /// How long a fetched PolicySnapshot stays fresh
    pub ttl_secs: u64,
    /// Serve the previous snapshot when a refresh fails
    pub serve_stale_on_error: bool,
}

impl Default for PolicyCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 30,
            serve_stale_on_error: true,
        }
    }
}
