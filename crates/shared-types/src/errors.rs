//! # Error Types
//!
//! Store-level failures shared by every subsystem's outbound ports.
//!
//! Uniqueness conflicts on known idempotency keys are deliberately NOT here:
//! those are routine traffic and surface as `InsertOutcome::Existing`.

use thiserror::Error;

/// Failures a store adapter may report.
///
/// Anything here is a genuine infrastructure problem; callers may retry,
/// relying on the insert contract to keep side effects at-most-once.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Store unreachable or the operation failed transiently.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A constraint violation outside the known idempotency keys, or data
    /// that fails its own invariants on read.
    #[error("Store corrupted: {0}")]
    Corrupted(String),
}
