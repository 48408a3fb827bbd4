//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::IssuanceReport;
use crate::domain::errors::RewardError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{EventReference, EventType, UserId};

/// Primary Reward Issuance API
///
/// Called by payment-verification and credit-consumption flows after they
/// have independently confirmed a monetizable action.
#[async_trait]
pub trait RewardIssuanceApi: Send + Sync {
    /// Credit every eligible ancestor of `referred_user_id` for one
    /// verified event, at most once per (ancestor, level, event).
    ///
    /// Safe to call any number of times with the same arguments: callers
    /// are expected to invoke it speculatively on every webhook delivery,
    /// including retries, and rely on the idempotency key rather than
    /// deduplicating upstream. `event_reference` must be the stable
    /// external identifier of the event.
    async fn issue_rewards_for_event(
        &self,
        referred_user_id: UserId,
        event_type: EventType,
        event_reference: EventReference,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuanceReport, RewardError>;
}
