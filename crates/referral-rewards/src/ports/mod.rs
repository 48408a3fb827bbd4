//! Ports: inbound API and outbound store/policy/graph contracts.

pub mod inbound;
pub mod outbound;

pub use inbound::RewardIssuanceApi;
pub use outbound::{AncestorResolver, PolicyProvider, RewardStore};
