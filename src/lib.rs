//! Scrim Room - Team balancing service for 5v5 scrims
//!
//! This crate partitions a ten-player roster into two five-player teams that
//! are as evenly matched as possible, with optional role-coverage scoring
//! for games that play fixed role slots.

pub mod balance;
pub mod config;
pub mod error;
pub mod profile;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{BalanceError, Result};
pub use types::*;

// Re-export key components
pub use balance::{CoverageFirstBalancer, TeamBalancer};
pub use roster::RosterManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
