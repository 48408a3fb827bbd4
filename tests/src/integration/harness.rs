//! Shared wiring: a full in-memory referral engine.
//!
//! Everything is assembled exactly as production wiring would, only with
//! the in-memory adapters behind every port.

use chrono::{DateTime, TimeZone, Utc};
use referral_attribution::adapters::memory::{InMemoryCodeStore, InMemoryEdgeStore};
use referral_attribution::{AttributionApi, AttributionService, CaptureOutcome};
use referral_ranking::adapters::{InMemoryAgentDirectory, RewardStoreReferralSource};
use referral_ranking::{AgentProfile, LeaderboardService};
use referral_rewards::adapters::{AttributionAncestorResolver, InMemoryPolicyProvider};
use referral_rewards::adapters::memory::InMemoryRewardStore;
use referral_rewards::{
    IssuanceReport, PolicySnapshot, RawPolicy, RawRewardRule, RawTierThreshold, RewardError,
    RewardIssuanceApi, RewardIssuanceService,
};
use shared_types::{EventReference, EventType, UserId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fully wired engine over in-memory stores.
pub struct Engine {
    pub attribution: Arc<AttributionService>,
    pub rewards: Arc<InMemoryRewardStore>,
    pub policy: Arc<InMemoryPolicyProvider>,
    pub issuance: Arc<RewardIssuanceService>,
    pub directory: Arc<InMemoryAgentDirectory>,
    pub leaderboard: LeaderboardService,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_policy(default_policy())
    }

    pub fn with_policy(policy: PolicySnapshot) -> Self {
        let attribution = Arc::new(AttributionService::new(
            Arc::new(InMemoryCodeStore::new()),
            Arc::new(InMemoryEdgeStore::new()),
        ));
        let rewards = Arc::new(InMemoryRewardStore::new());
        let provider = Arc::new(InMemoryPolicyProvider::new(policy));
        let issuance = Arc::new(RewardIssuanceService::new(
            rewards.clone(),
            provider.clone(),
            Arc::new(AttributionAncestorResolver::new(attribution.clone())),
        ));
        let directory = Arc::new(InMemoryAgentDirectory::new());
        let leaderboard = LeaderboardService::new(
            Arc::new(RewardStoreReferralSource::new(rewards.clone())),
            directory.clone(),
            provider.clone(),
        );
        Self {
            attribution,
            rewards,
            policy: provider,
            issuance,
            directory,
            leaderboard,
        }
    }

    /// Register an agent in the directory and hand back their id.
    pub async fn agent(&self, name: &str) -> UserId {
        let user = UserId::new();
        self.directory.upsert(AgentProfile {
            user_id: user,
            display_name: name.into(),
            opted_out: false,
        });
        user
    }

    /// Sign `referred` up under `referrer`'s code.
    pub async fn refer(&self, referrer: UserId, referred: UserId) -> CaptureOutcome {
        let code = self
            .attribution
            .ensure_referral_code(referrer)
            .await
            .expect("code issuance")
            .code;
        self.attribution
            .capture_referral(referred, &code.code, default_policy().max_depth)
            .await
            .expect("capture")
    }

    /// A verified payment event for `referred`.
    pub async fn pay(
        &self,
        referred: UserId,
        reference: &str,
        at: DateTime<Utc>,
    ) -> Result<IssuanceReport, RewardError> {
        self.issuance
            .issue_rewards_for_event(
                referred,
                EventType::SubscriptionPayment,
                EventReference::new(reference).expect("reference"),
                at,
            )
            .await
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Two reward levels, bronze/silver/gold tiers, roomy caps, max depth 5.
pub fn default_policy() -> PolicySnapshot {
    PolicySnapshot::validate(RawPolicy {
        enabled: true,
        max_depth: 5,
        enabled_levels: vec![1, 2],
        reward_rules: BTreeMap::from([
            (
                1,
                RawRewardRule {
                    credit_type: "listing_credit".into(),
                    amount: 5,
                },
            ),
            (
                2,
                RawRewardRule {
                    credit_type: "featured_credit".into(),
                    amount: 2,
                },
            ),
        ]),
        tier_thresholds: vec![
            RawTierThreshold {
                name: "bronze".into(),
                min_active_referrals: 0,
            },
            RawTierThreshold {
                name: "silver".into(),
                min_active_referrals: 5,
            },
            RawTierThreshold {
                name: "gold".into(),
                min_active_referrals: 15,
            },
        ],
        daily_cap_per_referrer: 100,
        monthly_cap_per_referrer: 1000,
    })
    .expect("default policy is valid")
}

/// A fixed mid-month instant so window math stays deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
}
