//! Ports: inbound API and outbound data feeds.

pub mod inbound;
pub mod outbound;

pub use inbound::LeaderboardApi;
pub use outbound::{ActiveReferralSource, AgentDirectory};
