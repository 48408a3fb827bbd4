//! # Referral Attribution Subsystem
//!
//! Issues one shareable referral code per user and records the one-time
//! referrer→referred edge that attributes a signup to its upstream chain.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (ReferralCode, ReferralEdge, Ancestor) and
//!   the code-generation algorithm
//! - **Ports**: Inbound (AttributionApi) and Outbound (CodeStore, EdgeStore)
//! - **Adapters**: In-memory stores with unique-constraint semantics
//! - **Application**: Service orchestration
//!
//! ## Correctness model
//!
//! The edge set is a forest bounded by `max_depth`; that bound is enforced
//! at capture time by depth capping, not by cycle detection. Duplicate and
//! racing captures resolve through the store's conditional insert: the
//! loser observes the winner's row and reports a benign no-op.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::AttributionService;
pub use config::AttributionConfig;
pub use domain::entities::*;
pub use domain::errors::AttributionError;
pub use ports::inbound::AttributionApi;
pub use ports::outbound::{CodeStore, EdgeStore};
