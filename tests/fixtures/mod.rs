//! Shared fixtures for integration tests

use scrim_room::types::{Player, Role};

/// Build a player record
pub fn player(id: &str, name: &str, rank: u32, roles: &[Role]) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        rank,
        roles: roles.to_vec(),
    }
}

/// A realistic Dota 2 ten-player roster with mixed role coverage
pub fn dota2_roster() -> Vec<Player> {
    vec![
        player("1", "ERROR", 6000, &[1, 2]),
        player("2", "Shekar", 5400, &[1, 2, 3]),
        player("3", "shahri", 5600, &[1, 2, 3]),
        player("4", "shahab", 5700, &[1, 2, 3]),
        player("5", "dani", 5700, &[1, 2, 3]),
        player("6", "amir safe", 6500, &[1, 2]),
        player("7", "iliya", 5500, &[1, 2, 3, 4, 5]),
        player("8", "amir yones", 5800, &[3, 4, 5]),
        player("9", "gunner", 4000, &[5]),
        player("10", "behnam", 4500, &[5]),
    ]
}

/// A role-less roster built from the given ranks
pub fn roleless_roster(ranks: &[u32]) -> Vec<Player> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| player(&format!("p{i}"), &format!("Player {i}"), rank, &[]))
        .collect()
}
