//! Policy snapshots.
//!
//! Admin configuration arrives as a loosely-typed `RawPolicy` and is
//! validated once into an immutable `PolicySnapshot` value object. The
//! snapshot is passed explicitly into every issuance call; nothing in this
//! subsystem reads hidden global state, which keeps the engine pure given
//! a snapshot and inputs.

use serde::{Deserialize, Serialize};
use shared_types::CreditType;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Reward issued per qualifying event at one ancestor level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRule {
    pub credit_type: CreditType,
    pub amount: u32,
}

/// One tier boundary; tiers are ordered by ascending minimum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub name: String,
    pub min_active_referrals: u32,
}

/// Per-referrer issuance caps. Advisory under concurrency: two events can
/// both pass the check before either commits, an accepted bounded risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceCaps {
    pub daily_per_referrer: u32,
    pub monthly_per_referrer: u32,
}

/// Validated, immutable referral configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    pub enabled: bool,
    pub max_depth: u8,
    /// Levels that earn rewards; subset of 1..=max_depth.
    pub enabled_levels: BTreeSet<u8>,
    /// Reward per enabled level; levels without a rule earn nothing.
    pub reward_rules: BTreeMap<u8, RewardRule>,
    /// Ascending by minimum; the first minimum is always 0.
    pub tier_thresholds: Vec<TierThreshold>,
    pub caps: IssuanceCaps,
}

impl PolicySnapshot {
    /// The rule for a level, if that level both is enabled and has one.
    pub fn rule_for(&self, level: u8) -> Option<&RewardRule> {
        if !self.enabled_levels.contains(&level) {
            return None;
        }
        self.reward_rules.get(&level)
    }
}

/// Admin-facing shape before validation. Credit types are plain strings
/// here; unknown names are rejected, never passed through.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPolicy {
    pub enabled: bool,
    pub max_depth: u8,
    pub enabled_levels: Vec<u8>,
    pub reward_rules: BTreeMap<u8, RawRewardRule>,
    pub tier_thresholds: Vec<RawTierThreshold>,
    pub daily_cap_per_referrer: u32,
    pub monthly_cap_per_referrer: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawRewardRule {
    pub credit_type: String,
    pub amount: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawTierThreshold {
    pub name: String,
    pub min_active_referrals: u32,
}

/// Rejections produced while validating a `RawPolicy`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,

    #[error("Level {level} outside 1..={max_depth}")]
    LevelOutOfRange { level: u8, max_depth: u8 },

    #[error("Reward rule for level {level}: {reason}")]
    InvalidRule { level: u8, reason: String },

    #[error("Tier thresholds must not be empty")]
    NoTiers,

    #[error("Lowest tier must have minimum 0, got {0}")]
    LowestTierNotZero(u32),

    #[error("Tier '{name}' minimum {min} does not increase over the previous tier")]
    TiersNotAscending { name: String, min: u32 },
}

impl PolicySnapshot {
    /// Validate a raw admin policy into a snapshot.
    pub fn validate(raw: RawPolicy) -> Result<Self, PolicyError> {
        if raw.max_depth == 0 {
            return Err(PolicyError::ZeroMaxDepth);
        }

        let mut enabled_levels = BTreeSet::new();
        for level in raw.enabled_levels {
            if level == 0 || level > raw.max_depth {
                return Err(PolicyError::LevelOutOfRange {
                    level,
                    max_depth: raw.max_depth,
                });
            }
            enabled_levels.insert(level);
        }

        let mut reward_rules = BTreeMap::new();
        for (level, rule) in raw.reward_rules {
            if level == 0 || level > raw.max_depth {
                return Err(PolicyError::LevelOutOfRange {
                    level,
                    max_depth: raw.max_depth,
                });
            }
            if rule.amount == 0 {
                return Err(PolicyError::InvalidRule {
                    level,
                    reason: "amount must be positive".into(),
                });
            }
            let credit_type = rule.credit_type.parse::<CreditType>().map_err(|e| {
                PolicyError::InvalidRule {
                    level,
                    reason: e.to_string(),
                }
            })?;
            reward_rules.insert(
                level,
                RewardRule {
                    credit_type,
                    amount: rule.amount,
                },
            );
        }

        if raw.tier_thresholds.is_empty() {
            return Err(PolicyError::NoTiers);
        }
        let mut tiers: Vec<TierThreshold> = raw
            .tier_thresholds
            .into_iter()
            .map(|t| TierThreshold {
                name: t.name,
                min_active_referrals: t.min_active_referrals,
            })
            .collect();
        tiers.sort_by_key(|t| t.min_active_referrals);
        if tiers[0].min_active_referrals != 0 {
            return Err(PolicyError::LowestTierNotZero(tiers[0].min_active_referrals));
        }
        for pair in tiers.windows(2) {
            if pair[1].min_active_referrals == pair[0].min_active_referrals {
                return Err(PolicyError::TiersNotAscending {
                    name: pair[1].name.clone(),
                    min: pair[1].min_active_referrals,
                });
            }
        }

        Ok(Self {
            enabled: raw.enabled,
            max_depth: raw.max_depth,
            enabled_levels,
            reward_rules,
            tier_thresholds: tiers,
            caps: IssuanceCaps {
                daily_per_referrer: raw.daily_cap_per_referrer,
                monthly_per_referrer: raw.monthly_cap_per_referrer,
            },
        })
    }
}
