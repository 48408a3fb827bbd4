//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{LedgerEntry, ReferralReward};
use crate::domain::policy::PolicySnapshot;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use referral_attribution::Ancestor;
use shared_types::{CreditType, InsertOutcome, StoreError, UserId};
use std::collections::HashMap;

/// Persistence for reward rows and the credit ledger.
///
/// Unique constraint: one reward row per `RewardKey`. The reward row and
/// its ledger credit commit in ONE transaction; a reward must never exist
/// without its credit or vice versa.
#[async_trait]
pub trait RewardStore: Send + Sync {
    /// Conditional insert of a reward together with its ledger credit.
    ///
    /// On a key conflict nothing is written (no double credit) and the
    /// existing row comes back as `Existing`.
    async fn insert_reward(
        &self,
        reward: ReferralReward,
        credit: LedgerEntry,
    ) -> Result<InsertOutcome<ReferralReward>, StoreError>;

    /// Reward rows issued to `referrer` with `issued_at >= since`.
    /// Backs the advisory daily/monthly cap checks.
    async fn count_issued_since(
        &self,
        referrer_user_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<u64, StoreError>;

    /// Distinct active referrals per referrer: the number of distinct
    /// `referred_user_id` values among a referrer's reward rows, optionally
    /// bounded below by `since`. Feeds tier and leaderboard ranking.
    async fn active_referral_counts(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<HashMap<UserId, u64>, StoreError>;

    /// Sum of ledger deltas for one user and credit type.
    async fn balance(
        &self,
        user_id: UserId,
        credit_type: CreditType,
    ) -> Result<i64, StoreError>;

    /// Append a standalone ledger entry. Used by credit-consuming features
    /// for spends; reward credits go through `insert_reward` instead.
    async fn append_entry(&self, entry: LedgerEntry) -> Result<(), StoreError>;
}

/// Source of the current policy snapshot (admin-configured, read-only to
/// this subsystem). Implementations are expected to cache with a short TTL.
#[async_trait]
pub trait PolicyProvider: Send + Sync {
    async fn current(&self) -> Result<PolicySnapshot, StoreError>;
}

/// Upward ancestor-chain resolution, provided by the attribution subsystem.
#[async_trait]
pub trait AncestorResolver: Send + Sync {
    async fn ancestors(
        &self,
        user_id: UserId,
        max_depth: u8,
    ) -> Result<Vec<Ancestor>, StoreError>;
}
