//! Team balancing core
//!
//! This module enumerates every structurally distinct split of a ten-player
//! roster into two five-player teams, scores each split, and ranks the
//! candidates.

pub mod combinations;
pub mod evaluator;

// Re-export commonly used types
pub use combinations::combinations;
pub use evaluator::{
    BalanceConfig, CoverageFirstBalancer, TeamBalancer, ROSTER_SIZE, TEAM_SIZE,
};
