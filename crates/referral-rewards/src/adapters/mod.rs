//! Adapters: in-memory persistence, policy caching, attribution bridge.

pub mod attribution;
pub mod memory;
pub mod policy_cache;

pub use attribution::AttributionAncestorResolver;
pub use memory::{InMemoryPolicyProvider, InMemoryRewardStore};
pub use policy_cache::CachedPolicyProvider;
