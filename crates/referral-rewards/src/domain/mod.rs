//! Domain layer: policy validation, reward entities, cap windows.

pub mod entities;
pub mod errors;
pub mod policy;
pub mod windows;

pub use entities::*;
pub use errors::RewardError;
pub use policy::PolicySnapshot;
