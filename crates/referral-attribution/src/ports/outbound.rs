//! Outbound Ports (Driven Ports / SPI)
//!
//! Store contracts backing the attribution graph. Any transactional store
//! with row-level unique constraints can implement these; the engine never
//! takes a lock of its own.

use crate::domain::entities::{ReferralCode, ReferralEdge};
use async_trait::async_trait;
use shared_types::{InsertOutcome, StoreError, UserId};

/// Persistence for referral codes.
///
/// Unique constraints: one row per `user_id`, one row per `code`.
#[async_trait]
pub trait CodeStore: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<ReferralCode>, StoreError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, StoreError>;

    /// Conditional insert. On conflict the returned `Existing` row is the
    /// one that fired the constraint: the caller's own row when the user
    /// already holds a code, or another user's row when the code string
    /// collided. The caller distinguishes the two by `user_id`.
    async fn insert(&self, code: ReferralCode) -> Result<InsertOutcome<ReferralCode>, StoreError>;
}

/// Persistence for the attribution edge table.
///
/// Unique constraint: one row per `referred_user_id`. Rows are immutable.
#[async_trait]
pub trait EdgeStore: Send + Sync {
    async fn find_edge(&self, referred_user_id: UserId)
        -> Result<Option<ReferralEdge>, StoreError>;

    /// Conditional insert; a lost race returns the winner's edge.
    async fn insert_edge(
        &self,
        edge: ReferralEdge,
    ) -> Result<InsertOutcome<ReferralEdge>, StoreError>;
}
