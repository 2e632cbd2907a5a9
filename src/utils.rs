//! Utility functions for the team balancing service

use crate::types::Player;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique suggestion batch ID
pub fn generate_batch_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Sum the rank values of a team
pub fn team_rank_total(team: &[Player]) -> u32 {
    team.iter().map(|p| p.rank).sum()
}

/// Calculate the absolute difference between two rank totals
pub fn rank_difference(total_a: u32, total_b: u32) -> u32 {
    total_a.abs_diff(total_b)
}
