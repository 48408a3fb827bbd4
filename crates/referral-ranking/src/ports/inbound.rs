//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{LeaderboardSnapshot, LeaderboardWindow};
use crate::domain::errors::RankingError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::UserId;

/// Primary Leaderboard API
///
/// Consumed by the leaderboard UI. Responses are display-only: tier names
/// and active-referral counts, never credit or reward amounts.
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    /// Build a snapshot for one window as seen by `viewer`.
    ///
    /// `now` anchors the rolling window; passing it in keeps the ranking
    /// pure given its inputs.
    async fn leaderboard(
        &self,
        window: LeaderboardWindow,
        viewer: UserId,
        now: DateTime<Utc>,
    ) -> Result<LeaderboardSnapshot, RankingError>;
}
