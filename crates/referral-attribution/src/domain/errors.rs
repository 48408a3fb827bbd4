//! Error types for the Attribution Subsystem
//!
//! Only genuine failures live here. Expected outcomes (already captured,
//! depth limit, self referral) are `CaptureOutcome` variants, because
//! callers must treat them as success and must not retry.

use shared_types::StoreError;
use thiserror::Error;

/// All errors that can occur in attribution
#[derive(Debug, Error)]
pub enum AttributionError {
    /// The supplied referral code resolves to no user.
    #[error("Referral code not found: {0}")]
    CodeNotFound(String),

    /// Every generated candidate collided with an existing code.
    #[error("Code generation exhausted after {attempts} attempts")]
    CodeGenerationExhausted { attempts: u8 },

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
