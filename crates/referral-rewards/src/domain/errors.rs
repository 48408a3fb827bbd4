//! Error types for the Rewards Subsystem
//!
//! Policy-rejected outcomes (disabled level, cap reached) and idempotent
//! no-ops (already issued) are NOT errors; they live in `IssuanceReport`
//! as skips, because callers must treat them as success and never retry.

use shared_types::StoreError;
use thiserror::Error;

/// All errors that can occur during reward issuance
#[derive(Debug, Error)]
pub enum RewardError {
    /// No policy snapshot could be fetched.
    #[error("Policy unavailable: {0}")]
    PolicyUnavailable(String),

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Ancestor resolution failed below us.
    #[error("Ancestor resolution failed: {0}")]
    AncestorResolution(String),
}
