//! Reward Issuance Service
//!
//! Main service implementing RewardIssuanceApi.
//!
//! Pipeline per verified event:
//! 1. Load the policy snapshot; disabled policy short-circuits
//! 2. Resolve the ancestor chain, bounded by the policy's max depth
//! 3. Per ancestor: level/rule gate, advisory cap checks, then one
//!    conditional insert committing reward and ledger credit together
//! 4. Report new rows and per-ancestor skip reasons

use crate::domain::entities::{
    IssuanceReport, IssuanceSkip, LedgerEntry, ReferralReward, SkipReason,
};
use crate::domain::errors::RewardError;
use crate::domain::policy::PolicySnapshot;
use crate::domain::windows::{day_start, month_start};
use crate::ports::inbound::RewardIssuanceApi;
use crate::ports::outbound::{AncestorResolver, PolicyProvider, RewardStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use referral_attribution::Ancestor;
use shared_types::{EventReference, EventType, InsertOutcome, UserId};
use std::sync::Arc;
use tracing::{debug, info};

/// Reward Issuance Service
pub struct RewardIssuanceService {
    store: Arc<dyn RewardStore>,
    policy: Arc<dyn PolicyProvider>,
    ancestors: Arc<dyn AncestorResolver>,
}

impl RewardIssuanceService {
    pub fn new(
        store: Arc<dyn RewardStore>,
        policy: Arc<dyn PolicyProvider>,
        ancestors: Arc<dyn AncestorResolver>,
    ) -> Self {
        Self {
            store,
            policy,
            ancestors,
        }
    }

    /// Advisory cap check. Counts committed rewards only, so two in-flight
    /// events can both pass before either commits; that window is accepted
    /// and bounded, caps being abuse deterrents rather than hard limits.
    async fn cap_skip(
        &self,
        ancestor: &Ancestor,
        policy: &PolicySnapshot,
        issued_at: DateTime<Utc>,
    ) -> Result<Option<SkipReason>, RewardError> {
        let daily = self
            .store
            .count_issued_since(ancestor.user_id, day_start(issued_at))
            .await?;
        if daily >= u64::from(policy.caps.daily_per_referrer) {
            return Ok(Some(SkipReason::DailyCapReached));
        }

        let monthly = self
            .store
            .count_issued_since(ancestor.user_id, month_start(issued_at))
            .await?;
        if monthly >= u64::from(policy.caps.monthly_per_referrer) {
            return Ok(Some(SkipReason::MonthlyCapReached));
        }

        Ok(None)
    }
}

#[async_trait]
impl RewardIssuanceApi for RewardIssuanceService {
    async fn issue_rewards_for_event(
        &self,
        referred_user_id: UserId,
        event_type: EventType,
        event_reference: EventReference,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuanceReport, RewardError> {
        let policy = self
            .policy
            .current()
            .await
            .map_err(|e| RewardError::PolicyUnavailable(e.to_string()))?;

        // 1. Disabled program: nothing is read or written beyond this.
        if !policy.enabled {
            debug!(referred = %referred_user_id, "Referral program disabled, no rewards");
            return Ok(IssuanceReport::empty());
        }

        // 2. Ancestor chain, bounded by policy depth.
        let ancestors = self
            .ancestors
            .ancestors(referred_user_id, policy.max_depth)
            .await
            .map_err(|e| RewardError::AncestorResolution(e.to_string()))?;
        if ancestors.is_empty() {
            return Ok(IssuanceReport::empty());
        }

        let mut report = IssuanceReport::empty();
        for ancestor in &ancestors {
            // 3a. Level gate: disabled levels and levels without a rule
            //     earn nothing.
            let rule = match policy.rule_for(ancestor.level) {
                Some(rule) => *rule,
                None => {
                    report.skips.push(IssuanceSkip {
                        referrer_user_id: ancestor.user_id,
                        level: ancestor.level,
                        reason: SkipReason::LevelDisabled,
                    });
                    continue;
                }
            };

            // 3b. Advisory caps.
            if let Some(reason) = self.cap_skip(ancestor, &policy, issued_at).await? {
                info!(
                    referrer = %ancestor.user_id,
                    level = ancestor.level,
                    reason = reason.as_str(),
                    "Reward skipped by cap"
                );
                report.skips.push(IssuanceSkip {
                    referrer_user_id: ancestor.user_id,
                    level: ancestor.level,
                    reason,
                });
                continue;
            }

            // 3c. One conditional insert commits the reward row and its
            //     ledger credit together. A key conflict means a duplicate
            //     delivery or a lost race: success, nothing written.
            let reward = ReferralReward::new(
                ancestor.user_id,
                referred_user_id,
                ancestor.level,
                event_type,
                event_reference.clone(),
                rule.amount,
                rule.credit_type,
                issued_at,
            );
            let credit = LedgerEntry::for_reward(&reward);
            match self.store.insert_reward(reward, credit).await? {
                InsertOutcome::Created(reward) => {
                    info!(
                        referrer = %reward.referrer_user_id,
                        referred = %referred_user_id,
                        level = reward.level,
                        amount = reward.amount,
                        credit_type = %reward.credit_type,
                        event = %event_type,
                        "Referral reward issued"
                    );
                    report.issued += 1;
                }
                InsertOutcome::Existing(_) => {
                    debug!(
                        referrer = %ancestor.user_id,
                        level = ancestor.level,
                        reference = %event_reference,
                        "Reward already issued for this event"
                    );
                    report.skips.push(IssuanceSkip {
                        referrer_user_id: ancestor.user_id,
                        level: ancestor.level,
                        reason: SkipReason::AlreadyIssued,
                    });
                }
            }
        }

        info!(
            referred = %referred_user_id,
            event = %event_type,
            issued = report.issued,
            skipped = report.skips.len(),
            "Issuance complete"
        );
        Ok(report)
    }
}
