//! Roster selection for a balance request
//!
//! Tracks which pool players are picked for the next balance run. Selection
//! order is preserved: the first selected player becomes the anchor during
//! split enumeration.

use crate::balance::ROSTER_SIZE;
use crate::error::{BalanceError, Result};
use crate::types::{Player, PlayerId};

/// Players picked for the next balance request, in selection order
#[derive(Debug, Clone)]
pub struct RosterSelection {
    selected: Vec<Player>,
    capacity: usize,
}

impl RosterSelection {
    pub fn new() -> Self {
        Self {
            selected: Vec::with_capacity(ROSTER_SIZE),
            capacity: ROSTER_SIZE,
        }
    }

    /// Add a player to the selection
    pub fn select(&mut self, player: Player) -> Result<()> {
        if self.selected.len() >= self.capacity {
            return Err(BalanceError::RosterFull {
                capacity: self.capacity,
            }
            .into());
        }

        if self.contains(&player.id) {
            return Err(BalanceError::DuplicatePlayerId {
                player_id: player.id,
            }
            .into());
        }

        self.selected.push(player);
        Ok(())
    }

    /// Remove a player from the selection, returning it
    pub fn deselect(&mut self, player_id: &str) -> Result<Player> {
        match self.selected.iter().position(|p| p.id == player_id) {
            Some(index) => Ok(self.selected.remove(index)),
            None => Err(BalanceError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into()),
        }
    }

    /// Drop every selected player
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.selected.iter().any(|p| &p.id == player_id)
    }

    /// Selected players in selection order
    pub fn players(&self) -> &[Player] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether exactly a full roster is selected
    pub fn is_ready(&self) -> bool {
        self.selected.len() == self.capacity
    }
}

impl Default for RosterSelection {
    fn default() -> Self {
        Self::new()
    }
}
