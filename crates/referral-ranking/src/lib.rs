//! # Referral Ranking Subsystem
//!
//! Read-only derivation of referral tiers and rolling-window leaderboards
//! from the reward ledger. Never writes anything.
//!
//! ## Architecture
//!
//! - **Domain**: tier resolution, dense competition ranking, privacy
//!   filtering
//! - **Ports**: Inbound (LeaderboardApi) and Outbound (ActiveReferralSource,
//!   AgentDirectory)
//! - **Adapters**: reward-store feed, in-memory agent directory
//! - **Application**: Service orchestration
//!
//! ## Failure semantics
//!
//! Any data-access error yields an explicit `RankingError::Unavailable`.
//! A partial or misleading ranking is never returned.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::LeaderboardService;
pub use config::RankingConfig;
pub use domain::entities::*;
pub use domain::errors::RankingError;
pub use domain::rank::dense_ranks;
pub use domain::tiers::resolve_tier;
pub use ports::inbound::LeaderboardApi;
pub use ports::outbound::{ActiveReferralSource, AgentDirectory};
