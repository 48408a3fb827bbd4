//! # Referral Rewards Subsystem
//!
//! Turns verified monetizable events into at-most-once credit rewards for
//! the referred user's upstream ancestors, under an admin-configured policy
//! snapshot.
//!
//! ## Architecture
//!
//! - **Domain**: PolicySnapshot validation, reward/ledger entities, cap
//!   windows
//! - **Ports**: Inbound (RewardIssuanceApi) and Outbound (RewardStore,
//!   PolicyProvider, AncestorResolver)
//! - **Adapters**: In-memory reward/ledger store, TTL policy cache,
//!   attribution-backed ancestor resolver
//! - **Application**: Service orchestration
//!
//! ## Correctness model
//!
//! Callers in payment and webhook paths invoke issuance speculatively after
//! every verification, including redeliveries. Correctness rests on the
//! idempotency key `(referrer, referred, level, event_type,
//! event_reference)`: the reward row and its ledger credit commit together,
//! and a uniqueness conflict on that key reads as success-no-op. Caps are
//! advisory abuse deterrents, not hard security boundaries.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::RewardIssuanceService;
pub use config::PolicyCacheConfig;
pub use domain::entities::*;
pub use domain::errors::RewardError;
pub use domain::policy::{
    IssuanceCaps, PolicyError, PolicySnapshot, RawPolicy, RawRewardRule, RawTierThreshold,
    RewardRule, TierThreshold,
};
pub use ports::inbound::RewardIssuanceApi;
pub use ports::outbound::{AncestorResolver, PolicyProvider, RewardStore};
