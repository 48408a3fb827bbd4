//! Configuration for the Attribution Subsystem

use serde::{Deserialize, Serialize};

/// Attribution configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttributionConfig {
    /// Length of generated referral codes
    pub code_length: usize,
    /// Insert attempts before giving up on code generation
    pub max_code_attempts: u8,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            code_length: 8,
            max_code_attempts: 5,
        }
    }
}
