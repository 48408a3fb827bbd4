//! Core entities for reward issuance and the credit ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{CreditType, EventReference, EventType, RewardId, UserId};

/// The idempotency key for reward issuance.
///
/// At most one reward row ever exists per key; duplicate webhook delivery
/// and re-entrant calls collapse onto the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardKey {
    pub referrer_user_id: UserId,
    pub referred_user_id: UserId,
    pub level: u8,
    pub event_type: EventType,
    pub event_reference: EventReference,
}

/// An issued reward. Immutable; reversals are separate compensating
/// entries, never mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralReward {
    pub id: RewardId,
    pub referrer_user_id: UserId,
    pub referred_user_id: UserId,
    pub level: u8,
    pub event_type: EventType,
    pub event_reference: EventReference,
    pub amount: u32,
    pub credit_type: CreditType,
    pub issued_at: DateTime<Utc>,
}

impl ReferralReward {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        referrer_user_id: UserId,
        referred_user_id: UserId,
        level: u8,
        event_type: EventType,
        event_reference: EventReference,
        amount: u32,
        credit_type: CreditType,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RewardId::new(),
            referrer_user_id,
            referred_user_id,
            level,
            event_type,
            event_reference,
            amount,
            credit_type,
            issued_at,
        }
    }

    pub fn key(&self) -> RewardKey {
        RewardKey {
            referrer_user_id: self.referrer_user_id,
            referred_user_id: self.referred_user_id,
            level: self.level,
            event_type: self.event_type,
            event_reference: self.event_reference.clone(),
        }
    }
}

/// One append-only ledger row; a user's balance per credit type is the sum
/// of deltas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub user_id: UserId,
    pub credit_type: CreditType,
    pub delta: i64,
    /// Set for reward credits; spend entries (negative delta) have none.
    pub source_reward_id: Option<RewardId>,
    pub issued_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// The credit caused by a freshly issued reward.
    pub fn for_reward(reward: &ReferralReward) -> Self {
        Self {
            user_id: reward.referrer_user_id,
            credit_type: reward.credit_type,
            delta: i64::from(reward.amount),
            source_reward_id: Some(reward.id),
            issued_at: reward.issued_at,
        }
    }

    /// A spend by a credit-consuming feature; shares the ledger contract
    /// but originates outside this engine.
    pub fn spend(
        user_id: UserId,
        credit_type: CreditType,
        amount: u32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            credit_type,
            delta: -i64::from(amount),
            source_reward_id: None,
            issued_at: at,
        }
    }
}

/// Why an ancestor/level pair earned nothing from one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Level not enabled, or no reward rule configured for it.
    LevelDisabled,
    /// Daily per-referrer cap already met.
    DailyCapReached,
    /// Monthly per-referrer cap already met.
    MonthlyCapReached,
    /// This exact reward was already issued (duplicate delivery).
    AlreadyIssued,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LevelDisabled => "level_disabled",
            Self::DailyCapReached => "daily_cap",
            Self::MonthlyCapReached => "monthly_cap",
            Self::AlreadyIssued => "already_issued",
        }
    }
}

/// One skipped ancestor/level pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceSkip {
    pub referrer_user_id: UserId,
    pub level: u8,
    pub reason: SkipReason,
}

/// What one issuance call did. `issued` counts new rows only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceReport {
    pub issued: u32,
    pub skips: Vec<IssuanceSkip>,
}

impl IssuanceReport {
    /// Report for a call that did nothing (policy disabled, no ancestors).
    pub fn empty() -> Self {
        Self::default()
    }
}
