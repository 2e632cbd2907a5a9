//! Roster coordination across pools, selection, and balancing
//!
//! The manager owns the per-game player pools and the current selection,
//! and drives the balancer once a full roster is picked. It is the seam the
//! surrounding application (CLI, UI) talks to.

use crate::balance::TeamBalancer;
use crate::error::{BalanceError, Result};
use crate::profile::GameProfileProvider;
use crate::roster::pool::PlayerPool;
use crate::roster::selection::RosterSelection;
use crate::types::{BalanceSuggestions, GameKey, Player};
use crate::utils::{current_timestamp, generate_batch_id};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Coordinates player pools, roster selection, and split generation
pub struct RosterManager {
    profile_provider: Arc<dyn GameProfileProvider>,
    balancer: Arc<dyn TeamBalancer>,
    pools: HashMap<GameKey, PlayerPool>,
    active_game: GameKey,
    selection: RosterSelection,
}

impl RosterManager {
    /// Create a manager with one empty pool per game the provider knows
    pub fn new(
        profile_provider: Arc<dyn GameProfileProvider>,
        balancer: Arc<dyn TeamBalancer>,
    ) -> Self {
        let pools = profile_provider
            .available_games()
            .into_iter()
            .map(|game| (game, PlayerPool::new(game)))
            .collect();

        Self {
            profile_provider,
            balancer,
            pools,
            active_game: GameKey::Dota2,
            selection: RosterSelection::new(),
        }
    }

    pub fn active_game(&self) -> GameKey {
        self.active_game
    }

    /// Switch the active game, dropping the current selection
    pub fn switch_game(&mut self, game: GameKey) {
        if game != self.active_game {
            info!("Switching active game from {} to {}", self.active_game, game);
            self.active_game = game;
            self.selection.clear();
        }
    }

    fn active_pool(&self) -> Result<&PlayerPool> {
        self.pools
            .get(&self.active_game)
            .ok_or_else(|| {
                BalanceError::UnknownProfile {
                    key: self.active_game.to_string(),
                }
                .into()
            })
    }

    fn active_pool_mut(&mut self) -> Result<&mut PlayerPool> {
        self.pools
            .get_mut(&self.active_game)
            .ok_or_else(|| {
                BalanceError::UnknownProfile {
                    key: self.active_game.to_string(),
                }
                .into()
            })
    }

    /// Add a player to the active pool
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        self.active_pool_mut()?.add_player(player)
    }

    /// Remove a player from the active pool (and the selection, if picked)
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player> {
        let removed = self.active_pool_mut()?.remove_player(player_id)?;
        if self.selection.contains(&removed.id) {
            self.selection.deselect(player_id)?;
        }
        Ok(removed)
    }

    /// Drop every player from the active pool and the selection
    pub fn clear_pool(&mut self) -> Result<()> {
        self.active_pool_mut()?.clear();
        self.selection.clear();
        Ok(())
    }

    /// Pick a pool player for the next balance request
    pub fn select_player(&mut self, player_id: &str) -> Result<()> {
        let player = self
            .active_pool()?
            .get_player(player_id)
            .cloned()
            .ok_or_else(|| BalanceError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;

        self.selection.select(player)
    }

    /// Drop a player from the selection (the pool keeps it)
    pub fn deselect_player(&mut self, player_id: &str) -> Result<()> {
        self.selection.deselect(player_id)?;
        Ok(())
    }

    /// Pool players not currently selected
    pub fn available_players(&self) -> Result<Vec<&Player>> {
        Ok(self
            .active_pool()?
            .players()
            .iter()
            .filter(|p| !self.selection.contains(&p.id))
            .collect())
    }

    /// Players picked so far, in selection order
    pub fn selected_players(&self) -> &[Player] {
        self.selection.players()
    }

    /// Whether a full ten-player roster is selected
    pub fn is_ready(&self) -> bool {
        self.selection.is_ready()
    }

    /// Generate ranked split suggestions for the current selection
    ///
    /// The selection must hold exactly ten players; the balancer rejects
    /// anything else. Each call produces a fresh suggestion batch.
    pub fn balance(&self) -> Result<BalanceSuggestions> {
        let profile = self.profile_provider.get_profile(self.active_game)?;
        let splits = self.balancer.balance(self.selection.players(), &profile)?;

        info!(
            "Generated {} split suggestions for {}",
            splits.len(),
            profile.name
        );

        Ok(BalanceSuggestions {
            batch_id: generate_batch_id(),
            game: self.active_game,
            splits,
            generated_at: current_timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::CoverageFirstBalancer;
    use crate::profile::StaticProfileProvider;

    fn create_test_manager() -> RosterManager {
        RosterManager::new(
            Arc::new(StaticProfileProvider::new()),
            Arc::new(CoverageFirstBalancer::new()),
        )
    }

    fn create_test_player(id: &str, rank: u32) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            rank,
            roles: Vec::new(),
        }
    }

    fn seed_and_select(manager: &mut RosterManager, count: usize) {
        for i in 0..count {
            let id = format!("p{i}");
            manager
                .add_player(create_test_player(&id, 1000 + i as u32 * 100))
                .unwrap();
            manager.select_player(&id).unwrap();
        }
    }

    #[test]
    fn test_selection_requires_pool_membership() {
        let mut manager = create_test_manager();
        let err = manager.select_player("ghost").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BalanceError>(),
            Some(BalanceError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_available_players_excludes_selected() {
        let mut manager = create_test_manager();
        manager.add_player(create_test_player("p1", 1000)).unwrap();
        manager.add_player(create_test_player("p2", 2000)).unwrap();
        manager.select_player("p1").unwrap();

        let available = manager.available_players().unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "p2");
    }

    #[test]
    fn test_switch_game_clears_selection() {
        let mut manager = create_test_manager();
        manager.add_player(create_test_player("p1", 1000)).unwrap();
        manager.select_player("p1").unwrap();

        manager.switch_game(GameKey::CounterStrike);
        assert_eq!(manager.active_game(), GameKey::CounterStrike);
        assert!(manager.selected_players().is_empty());

        // Pools are per game; the Dota 2 pool keeps its players.
        manager.switch_game(GameKey::Dota2);
        assert_eq!(manager.available_players().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_player_also_deselects() {
        let mut manager = create_test_manager();
        manager.add_player(create_test_player("p1", 1000)).unwrap();
        manager.select_player("p1").unwrap();

        manager.remove_player("p1").unwrap();
        assert!(manager.selected_players().is_empty());
        assert!(manager.available_players().unwrap().is_empty());
    }

    #[test]
    fn test_deselect_keeps_player_in_pool() {
        let mut manager = create_test_manager();
        manager.add_player(create_test_player("p1", 1000)).unwrap();
        manager.select_player("p1").unwrap();

        manager.deselect_player("p1").unwrap();
        assert!(manager.selected_players().is_empty());
        assert_eq!(manager.available_players().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_pool_drops_selection_too() {
        let mut manager = create_test_manager();
        seed_and_select(&mut manager, 4);

        manager.clear_pool().unwrap();
        assert!(manager.selected_players().is_empty());
        assert!(manager.available_players().unwrap().is_empty());
    }

    #[test]
    fn test_balance_rejects_partial_selection() {
        let mut manager = create_test_manager();
        seed_and_select(&mut manager, 9);
        assert!(!manager.is_ready());

        let err = manager.balance().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BalanceError>(),
            Some(BalanceError::WrongRosterSize { actual: 9, .. })
        ));
    }

    #[test]
    fn test_balance_full_selection() {
        let mut manager = create_test_manager();
        seed_and_select(&mut manager, 10);
        assert!(manager.is_ready());

        let suggestions = manager.balance().unwrap();
        assert_eq!(suggestions.game, GameKey::Dota2);
        assert_eq!(suggestions.splits.len(), 10);

        // Fresh batch per request
        let again = manager.balance().unwrap();
        assert_ne!(suggestions.batch_id, again.batch_id);
        assert_eq!(suggestions.splits, again.splits);
    }
}
