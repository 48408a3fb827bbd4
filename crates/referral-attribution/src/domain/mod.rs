//! Domain layer: entities, outcomes, errors, and code generation.

pub mod codegen;
pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::AttributionError;
