//! Core entities for the Attribution Graph

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::UserId;

/// A user's shareable referral code.
///
/// Created lazily, once, per user; never mutated or deleted. Both fields
/// carry a unique constraint in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralCode {
    pub user_id: UserId,
    /// Fixed-length uppercase alphanumeric, unpredictable but not secret.
    pub code: String,
}

impl ReferralCode {
    pub fn new(user_id: UserId, code: impl Into<String>) -> Self {
        Self {
            user_id,
            code: code.into(),
        }
    }
}

/// A one-time, immutable referrer→referred attribution edge.
///
/// `referred_user_id` is unique: a user is referred at most once, ever.
/// `depth` is the cumulative chain position; a root's direct referrals sit
/// at depth 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralEdge {
    pub referred_user_id: UserId,
    pub referrer_user_id: UserId,
    pub depth: u8,
    pub created_at: DateTime<Utc>,
}

impl ReferralEdge {
    pub fn new(
        referred_user_id: UserId,
        referrer_user_id: UserId,
        depth: u8,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            referred_user_id,
            referrer_user_id,
            depth,
            created_at,
        }
    }
}

/// One entry in an upward ancestor walk.
///
/// Level 1 is the immediate referrer; higher levels are more distant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestor {
    pub user_id: UserId,
    pub level: u8,
}

/// Result of `ensure_referral_code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsureCodeOutcome {
    pub code: ReferralCode,
    /// Whether this call created the code (false: it already existed).
    pub created: bool,
}

/// Result of `capture_referral`.
///
/// Everything except `Captured` is a successful no-op with a reason code;
/// callers must not retry these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// A new edge was written.
    Captured(ReferralEdge),
    /// The user already has an edge (duplicate call, lost race, or an
    /// attempt to re-attribute). Idempotent no-op.
    AlreadyCaptured,
    /// The referrer sits at the depth cap; no edge is written so reward
    /// liability stays bounded.
    DepthLimited,
    /// The supplied code belongs to the referred user themselves.
    SelfReferral,
}

impl CaptureOutcome {
    /// Whether a new edge was written by this call.
    pub fn captured(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    /// Machine-readable reason for a no-op outcome.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Captured(_) => None,
            Self::AlreadyCaptured => Some("already_captured"),
            Self::DepthLimited => Some("depth_limit"),
            Self::SelfReferral => Some("self_referral"),
        }
    }
}
