//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::AgentProfile;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{StoreError, UserId};
use std::collections::HashMap;

/// Distinct active-referral counts per referrer.
///
/// An "active referral" is a referred user for whom at least one reward
/// row names the referrer, regardless of level or event type. `since`
/// bounds `issued_at` from below; `None` means all time.
#[async_trait]
pub trait ActiveReferralSource: Send + Sync {
    async fn active_counts(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<HashMap<UserId, u64>, StoreError>;
}

/// The eligible leaderboard population with display metadata.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    async fn profiles(&self) -> Result<Vec<AgentProfile>, StoreError>;
}
