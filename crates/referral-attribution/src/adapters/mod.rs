//! Store adapters.

pub mod memory;

pub use memory::{InMemoryCodeStore, InMemoryEdgeStore};
