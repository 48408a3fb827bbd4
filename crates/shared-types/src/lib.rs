//! # Shared Types Crate
//!
//! Cross-crate identifiers, value objects, and the store insert contract
//! used by every referral subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: ids, credit/event types, and the
//!   `InsertOutcome` contract are defined once, here.
//! - **Conflicts are data, not errors**: a uniqueness violation on a known
//!   idempotency key surfaces as `InsertOutcome::Existing`, never as a
//!   `StoreError`. Callers decide whether "already there" matters.

pub mod entities;
pub mod errors;
pub mod store;

pub use entities::*;
pub use errors::StoreError;
pub use store::InsertOutcome;
