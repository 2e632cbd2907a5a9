//! Common types used throughout the team balancing service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::BalanceError;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for a batch of balance suggestions
pub type BatchId = Uuid;

/// Role slot identifier (positions 1 through 5)
pub type Role = u8;

/// All role slots a team can field
pub const ALL_ROLES: [Role; 5] = [1, 2, 3, 4, 5];

/// Games the balancer knows how to score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    Dota2,
    CounterStrike,
}

impl std::fmt::Display for GameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameKey::Dota2 => write!(f, "Dota2"),
            GameKey::CounterStrike => write!(f, "CounterStrike"),
        }
    }
}

impl std::str::FromStr for GameKey {
    type Err = BalanceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dota2" | "dota" => Ok(GameKey::Dota2),
            "cs" | "counterstrike" | "counter-strike" => Ok(GameKey::CounterStrike),
            other => Err(BalanceError::UnknownProfile {
                key: other.to_string(),
            }),
        }
    }
}

/// Player information for balancing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill scalar; the unit (MMR, Elo) comes from the game profile
    pub rank: u32,
    /// Role slots the player can fill; empty means flexible (any slot)
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Player {
    /// Resolve the role slots this player can fill.
    ///
    /// An empty `roles` list marks a flexible player who counts as covering
    /// every slot. All coverage computations go through this method.
    pub fn fillable_roles(&self) -> BTreeSet<Role> {
        if self.roles.is_empty() {
            ALL_ROLES.iter().copied().collect()
        } else {
            self.roles.iter().copied().collect()
        }
    }
}

/// One candidate partition of the ten selected players into two teams
///
/// Splits are built fresh on every balance request and never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
    /// Absolute difference of summed rank between the two teams
    pub rank_diff: u32,
    /// Combined distinct-role coverage of both teams (0-10); only present
    /// for role-aware games
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_coverage: Option<u8>,
}

/// Ranked suggestions produced for one balance request, best match first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSuggestions {
    pub batch_id: BatchId,
    pub game: GameKey,
    pub splits: Vec<Split>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_roles(roles: &[Role]) -> Player {
        Player {
            id: "p1".to_string(),
            name: "Test".to_string(),
            rank: 1000,
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn test_fillable_roles_explicit() {
        let player = player_with_roles(&[1, 3]);
        let roles = player.fillable_roles();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(&1));
        assert!(roles.contains(&3));
    }

    #[test]
    fn test_fillable_roles_flexible() {
        let player = player_with_roles(&[]);
        let roles = player.fillable_roles();
        assert_eq!(roles.len(), 5);
        for role in ALL_ROLES {
            assert!(roles.contains(&role));
        }
    }

    #[test]
    fn test_fillable_roles_deduplicates() {
        let player = player_with_roles(&[2, 2, 4]);
        assert_eq!(player.fillable_roles().len(), 2);
    }

    #[test]
    fn test_game_key_parsing() {
        assert_eq!("dota2".parse::<GameKey>().unwrap(), GameKey::Dota2);
        assert_eq!("CS".parse::<GameKey>().unwrap(), GameKey::CounterStrike);
        assert!("quake".parse::<GameKey>().is_err());
    }

    #[test]
    fn test_split_serialization_omits_missing_coverage() {
        let split = Split {
            team_a: vec![],
            team_b: vec![],
            rank_diff: 0,
            total_coverage: None,
        };
        let json = serde_json::to_string(&split).unwrap();
        assert!(!json.contains("total_coverage"));

        let with_coverage = Split {
            total_coverage: Some(10),
            ..split
        };
        let json = serde_json::to_string(&with_coverage).unwrap();
        assert!(json.contains("\"total_coverage\":10"));
    }
}
