//! Game profile traits and implementations
//!
//! This module defines the interface for resolving per-game scoring profiles,
//! along with the static implementation covering the built-in games.

use crate::error::{BalanceError, Result};
use crate::types::GameKey;
use serde::{Deserialize, Serialize};

/// Scoring configuration for a specific game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameProfile {
    /// Which game this profile scores
    pub key: GameKey,
    /// Human-readable game name
    pub name: String,
    /// Display name of the rank unit (e.g. "MMR", "Elo"); not consumed by scoring
    pub rank_unit: String,
    /// Whether role coverage participates in split ranking
    pub has_roles: bool,
}

impl GameProfile {
    /// Create the profile for Dota 2 (MMR ranks, role-aware)
    pub fn dota2() -> Self {
        Self {
            key: GameKey::Dota2,
            name: "Dota 2".to_string(),
            rank_unit: "MMR".to_string(),
            has_roles: true,
        }
    }

    /// Create the profile for Counter-Strike (Elo ranks, no roles)
    pub fn counter_strike() -> Self {
        Self {
            key: GameKey::CounterStrike,
            name: "Counter-Strike".to_string(),
            rank_unit: "Elo".to_string(),
            has_roles: false,
        }
    }
}

/// Trait for providing game profiles
pub trait GameProfileProvider: Send + Sync {
    /// Get the profile for a specific game
    fn get_profile(&self, key: GameKey) -> Result<GameProfile>;

    /// Get all games this provider knows
    fn available_games(&self) -> Vec<GameKey>;

    /// Validate a profile
    fn validate_profile(&self, profile: &GameProfile) -> Result<()>;
}

/// Static profile provider for the built-in games
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    dota2: GameProfile,
    counter_strike: GameProfile,
}

impl StaticProfileProvider {
    /// Create a provider with the default built-in profiles
    pub fn new() -> Self {
        Self {
            dota2: GameProfile::dota2(),
            counter_strike: GameProfile::counter_strike(),
        }
    }

    /// Create with custom profiles
    pub fn with_profiles(dota2: GameProfile, counter_strike: GameProfile) -> Result<Self> {
        let provider = Self {
            dota2: dota2.clone(),
            counter_strike: counter_strike.clone(),
        };

        provider.validate_profile(&dota2)?;
        provider.validate_profile(&counter_strike)?;

        Ok(provider)
    }

    /// Replace the profile for one game
    pub fn update_profile(&mut self, profile: GameProfile) -> Result<()> {
        self.validate_profile(&profile)?;
        match profile.key {
            GameKey::Dota2 => self.dota2 = profile,
            GameKey::CounterStrike => self.counter_strike = profile,
        }
        Ok(())
    }
}

impl Default for StaticProfileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GameProfileProvider for StaticProfileProvider {
    fn get_profile(&self, key: GameKey) -> Result<GameProfile> {
        match key {
            GameKey::Dota2 => Ok(self.dota2.clone()),
            GameKey::CounterStrike => Ok(self.counter_strike.clone()),
        }
    }

    fn available_games(&self) -> Vec<GameKey> {
        vec![GameKey::Dota2, GameKey::CounterStrike]
    }

    fn validate_profile(&self, profile: &GameProfile) -> Result<()> {
        if profile.name.is_empty() {
            return Err(BalanceError::ConfigurationError {
                message: "Profile name cannot be empty".to_string(),
            }
            .into());
        }

        if profile.rank_unit.is_empty() {
            return Err(BalanceError::ConfigurationError {
                message: "Profile rank unit cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
