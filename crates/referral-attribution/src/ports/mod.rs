//! Ports: inbound API and outbound store contracts.

pub mod inbound;
pub mod outbound;

pub use inbound::AttributionApi;
pub use outbound::{CodeStore, EdgeStore};
