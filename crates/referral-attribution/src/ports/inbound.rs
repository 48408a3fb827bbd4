//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{Ancestor, CaptureOutcome, EnsureCodeOutcome};
use crate::domain::errors::AttributionError;
use async_trait::async_trait;
use shared_types::UserId;

/// Primary Attribution API
///
/// Consumed by onboarding flows (code issuance, signup capture) and by the
/// reward engine (ancestor resolution).
#[async_trait]
pub trait AttributionApi: Send + Sync {
    /// Return the user's referral code, creating it on first call.
    ///
    /// Exactly one code ever exists per user; concurrent first calls agree
    /// on the winner's code.
    async fn ensure_referral_code(
        &self,
        user_id: UserId,
    ) -> Result<EnsureCodeOutcome, AttributionError>;

    /// Attribute `referred_user_id` to the owner of `code`, once.
    ///
    /// Unknown codes are input errors. Duplicate calls, lost insert races,
    /// self-referral, and the depth cap are successful no-ops carrying a
    /// reason code.
    async fn capture_referral(
        &self,
        referred_user_id: UserId,
        code: &str,
        max_depth: u8,
    ) -> Result<CaptureOutcome, AttributionError>;

    /// Walk upward from `user_id`, immediate referrer first.
    ///
    /// Stops at a root or after `max_depth` hops, whichever comes first.
    async fn referral_ancestors(
        &self,
        user_id: UserId,
        max_depth: u8,
    ) -> Result<Vec<Ancestor>, AttributionError>;
}
