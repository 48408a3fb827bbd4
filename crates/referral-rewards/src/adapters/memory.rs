//! In-memory store adapters.
//!
//! The reward table and the ledger live under one `RwLock`, so the
//! reward/credit pair commits atomically, matching the single-transaction
//! contract a relational store would provide.

use crate::domain::entities::{LedgerEntry, ReferralReward, RewardKey};
use crate::domain::policy::PolicySnapshot;
use crate::ports::outbound::{PolicyProvider, RewardStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared_types::{CreditType, InsertOutcome, StoreError, UserId};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
struct RewardTables {
    rewards: HashMap<RewardKey, ReferralReward>,
    ledger: Vec<LedgerEntry>,
}

/// In-memory `RewardStore`; unique index on the reward idempotency key.
#[derive(Default)]
pub struct InMemoryRewardStore {
    tables: RwLock<RewardTables>,
}

impl InMemoryRewardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total ledger rows, for tests asserting no double credit.
    pub fn ledger_len(&self) -> usize {
        self.tables.read().ledger.len()
    }
}

#[async_trait]
impl RewardStore for InMemoryRewardStore {
    async fn insert_reward(
        &self,
        reward: ReferralReward,
        credit: LedgerEntry,
    ) -> Result<InsertOutcome<ReferralReward>, StoreError> {
        let mut tables = self.tables.write();
        let key = reward.key();
        if let Some(existing) = tables.rewards.get(&key) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        tables.rewards.insert(key, reward.clone());
        tables.ledger.push(credit);
        Ok(InsertOutcome::Created(reward))
    }

    async fn count_issued_since(
        &self,
        referrer_user_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let tables = self.tables.read();
        let count = tables
            .rewards
            .values()
            .filter(|r| r.referrer_user_id == referrer_user_id && r.issued_at >= since)
            .count();
        Ok(count as u64)
    }

    async fn active_referral_counts(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<HashMap<UserId, u64>, StoreError> {
        let tables = self.tables.read();
        let mut distinct: HashMap<UserId, HashSet<UserId>> = HashMap::new();
        for reward in tables.rewards.values() {
            if let Some(since) = since {
                if reward.issued_at < since {
                    continue;
                }
            }
            distinct
                .entry(reward.referrer_user_id)
                .or_default()
                .insert(reward.referred_user_id);
        }
        Ok(distinct
            .into_iter()
            .map(|(referrer, referred)| (referrer, referred.len() as u64))
            .collect())
    }

    async fn balance(
        &self,
        user_id: UserId,
        credit_type: CreditType,
    ) -> Result<i64, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .ledger
            .iter()
            .filter(|e| e.user_id == user_id && e.credit_type == credit_type)
            .map(|e| e.delta)
            .sum())
    }

    async fn append_entry(&self, entry: LedgerEntry) -> Result<(), StoreError> {
        self.tables.write().ledger.push(entry);
        Ok(())
    }
}

/// In-memory `PolicyProvider` holding one snapshot; the admin surface
/// swaps it wholesale via `set`.
pub struct InMemoryPolicyProvider {
    snapshot: RwLock<PolicySnapshot>,
}

impl InMemoryPolicyProvider {
    pub fn new(snapshot: PolicySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    pub fn set(&self, snapshot: PolicySnapshot) {
        *self.snapshot.write() = snapshot;
    }
}

#[async_trait]
impl PolicyProvider for InMemoryPolicyProvider {
    async fn current(&self) -> Result<PolicySnapshot, StoreError> {
        Ok(self.snapshot.read().clone())
    }
}
