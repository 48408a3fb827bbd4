//! Adapters: reward-store feed and in-memory directory.

pub mod memory;
pub mod reward_feed;

pub use memory::InMemoryAgentDirectory;
pub use reward_feed::RewardStoreReferralSource;
