//! Domain layer: tiers, ranking, leaderboard shapes.

pub mod entities;
pub mod errors;
pub mod rank;
pub mod tiers;

pub use entities::*;
pub use errors::RankingError;
