//! Leaderboard Service
//!
//! Builds a snapshot in five steps:
//! 1. Load the eligible population and per-referrer active counts
//! 2. Sort descending by count, tie-broken by display name then user id
//! 3. Assign dense competition ranks over the FULL population
//! 4. Privacy-filter the visible entries (opt-outs hidden, names optionally
//!    anonymized) and truncate to top N
//! 5. Attach the viewer's own standing, which survives opt-out and top-N
//!    truncation

use crate::config::RankingConfig;
use crate::domain::entities::{
    anonymize_name, AgentProfile, LeaderboardEntry, LeaderboardSnapshot, LeaderboardWindow,
    ViewerStanding,
};
use crate::domain::errors::RankingError;
use crate::domain::rank::dense_ranks;
use crate::domain::tiers::resolve_tier;
use crate::ports::inbound::LeaderboardApi;
use crate::ports::outbound::{ActiveReferralSource, AgentDirectory};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use referral_rewards::{PolicyProvider, PolicySnapshot};
use shared_types::UserId;
use std::sync::Arc;
use tracing::{debug, info};

struct RankedAgent {
    profile: AgentProfile,
    active_referrals: u64,
    rank: u32,
    tier: String,
}

/// Leaderboard Service
pub struct LeaderboardService {
    source: Arc<dyn ActiveReferralSource>,
    directory: Arc<dyn AgentDirectory>,
    policy: Arc<dyn PolicyProvider>,
    config: RankingConfig,
}

impl LeaderboardService {
    pub fn new(
        source: Arc<dyn ActiveReferralSource>,
        directory: Arc<dyn AgentDirectory>,
        policy: Arc<dyn PolicyProvider>,
    ) -> Self {
        Self::with_config(source, directory, policy, RankingConfig::default())
    }

    pub fn with_config(
        source: Arc<dyn ActiveReferralSource>,
        directory: Arc<dyn AgentDirectory>,
        policy: Arc<dyn PolicyProvider>,
        config: RankingConfig,
    ) -> Self {
        Self {
            source,
            directory,
            policy,
            config,
        }
    }

    async fn rank_population(
        &self,
        window: LeaderboardWindow,
        now: DateTime<Utc>,
        policy: &PolicySnapshot,
    ) -> Result<Vec<RankedAgent>, RankingError> {
        let profiles = self.directory.profiles().await?;
        let counts = self.source.active_counts(window.start(now)).await?;

        let mut scored: Vec<(AgentProfile, u64)> = profiles
            .into_iter()
            .map(|p| {
                let count = counts.get(&p.user_id).copied().unwrap_or(0);
                (p, count)
            })
            .collect();
        // Deterministic total order: count desc, then name, then id.
        scored.sort_by(|(pa, ca), (pb, cb)| {
            cb.cmp(ca)
                .then_with(|| pa.display_name.cmp(&pb.display_name))
                .then_with(|| pa.user_id.cmp(&pb.user_id))
        });

        let ranks = dense_ranks(&scored.iter().map(|(_, c)| *c).collect::<Vec<_>>());

        scored
            .into_iter()
            .zip(ranks)
            .map(|((profile, active_referrals), rank)| {
                let tier = resolve_tier(active_referrals, &policy.tier_thresholds)
                    .ok_or_else(|| {
                        RankingError::Unavailable("no tier thresholds configured".into())
                    })?
                    .name
                    .clone();
                Ok(RankedAgent {
                    profile,
                    active_referrals,
                    rank,
                    tier,
                })
            })
            .collect()
    }
}

#[async_trait]
impl LeaderboardApi for LeaderboardService {
    async fn leaderboard(
        &self,
        window: LeaderboardWindow,
        viewer: UserId,
        now: DateTime<Utc>,
    ) -> Result<LeaderboardSnapshot, RankingError> {
        let policy = self
            .policy
            .current()
            .await
            .map_err(|e| RankingError::Unavailable(e.to_string()))?;

        let ranked = self.rank_population(window, now, &policy).await?;
        let total_agents = ranked.len() as u64;

        // Opted-out users keep their rank in the arithmetic; they are only
        // removed from what other users can see.
        let entries: Vec<LeaderboardEntry> = ranked
            .iter()
            .filter(|agent| !agent.profile.opted_out)
            .take(self.config.top_n)
            .map(|agent| LeaderboardEntry {
                rank: agent.rank,
                user_id: agent.profile.user_id,
                display_name: if self.config.anonymize_names {
                    anonymize_name(&agent.profile.display_name)
                } else {
                    agent.profile.display_name.clone()
                },
                tier: agent.tier.clone(),
                active_referrals: agent.active_referrals,
            })
            .collect();

        // A user always sees their own standing, opted out or not.
        let viewer_standing = ranked
            .iter()
            .find(|agent| agent.profile.user_id == viewer)
            .map(|agent| ViewerStanding {
                rank: agent.rank,
                tier: agent.tier.clone(),
                active_referrals: agent.active_referrals,
            });
        if viewer_standing.is_none() {
            debug!(viewer = %viewer, "Viewer is not an eligible agent");
        }

        info!(
            window = window.as_str(),
            total_agents,
            visible = entries.len(),
            "Leaderboard built"
        );
        Ok(LeaderboardSnapshot {
            window,
            entries,
            viewer: viewer_standing,
            total_agents,
        })
    }
}
