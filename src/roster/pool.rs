//! In-memory player pool for one game
//!
//! A pool holds the known players a roster can be picked from. Insertion
//! order is preserved; it determines the order players flow into a
//! selection and ultimately which player anchors split enumeration.

use crate::error::{BalanceError, Result};
use crate::types::{GameKey, Player, ALL_ROLES};
use tracing::debug;

/// Ordered collection of players available for one game
#[derive(Debug, Clone)]
pub struct PlayerPool {
    game: GameKey,
    players: Vec<Player>,
}

impl PlayerPool {
    /// Create an empty pool for a game
    pub fn new(game: GameKey) -> Self {
        Self {
            game,
            players: Vec::new(),
        }
    }

    /// Which game this pool belongs to
    pub fn game(&self) -> GameKey {
        self.game
    }

    /// Add a player to the pool
    ///
    /// Rejects duplicate ids and role slots outside 1-5. An empty role list
    /// is valid and marks a flexible player.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.players.iter().any(|p| p.id == player.id) {
            return Err(BalanceError::DuplicatePlayerId {
                player_id: player.id,
            }
            .into());
        }

        if let Some(&role) = player.roles.iter().find(|r| !ALL_ROLES.contains(r)) {
            return Err(BalanceError::InvalidRole {
                player_id: player.id,
                role,
            }
            .into());
        }

        debug!("Added player {} to {} pool", player.id, self.game);
        self.players.push(player);
        Ok(())
    }

    /// Remove a player, returning it
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player> {
        match self.players.iter().position(|p| p.id == player_id) {
            Some(index) => Ok(self.players.remove(index)),
            None => Err(BalanceError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into()),
        }
    }

    /// Remove every player from the pool
    pub fn clear(&mut self) {
        debug!("Cleared {} pool ({} players)", self.game, self.players.len());
        self.players.clear();
    }

    /// Look up a player by id
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// All players in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
