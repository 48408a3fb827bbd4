//! Leaderboard shapes. Display-only: tier names and active-referral counts,
//! never raw reward or credit amounts.

use chrono::{DateTime, Utc};
use referral_rewards::domain::windows::month_start;
use serde::{Deserialize, Serialize};
use shared_types::UserId;

/// Rolling leaderboard window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardWindow {
    /// Since the first instant of the current UTC calendar month.
    Month,
    /// Unbounded.
    AllTime,
}

impl LeaderboardWindow {
    /// Lower bound on `issued_at`, or `None` for the unbounded window.
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Month => Some(month_start(now)),
            Self::AllTime => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::AllTime => "all_time",
        }
    }
}

/// One eligible user as the directory knows them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub user_id: UserId,
    pub display_name: String,
    /// Opted out of appearing in visible leaderboard entries.
    pub opted_out: bool,
}

/// A visible leaderboard entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: UserId,
    pub display_name: String,
    pub tier: String,
    pub active_referrals: u64,
}

/// The viewer's own standing; returned even when the viewer is opted out
/// or outside the visible top N.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerStanding {
    pub rank: u32,
    pub tier: String,
    pub active_referrals: u64,
}

/// A complete leaderboard response for one window and viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub window: LeaderboardWindow,
    pub entries: Vec<LeaderboardEntry>,
    /// `None` when the viewer is not an eligible agent.
    pub viewer: Option<ViewerStanding>,
    /// Total eligible population, opted-out users included.
    pub total_agents: u64,
}

/// Reduce a display name to "F. Surname" form.
///
/// Single-token names pass through unchanged; there is nothing to reduce
/// them to.
pub fn anonymize_name(name: &str) -> String {
    let mut parts = name.split_whitespace();
    let first = match parts.next() {
        Some(first) => first,
        None => return String::new(),
    };
    match parts.last() {
        Some(surname) => {
            let initial: String = first.chars().take(1).collect();
            format!("{initial}. {surname}")
        }
        None => first.to_string(),
    }
}
