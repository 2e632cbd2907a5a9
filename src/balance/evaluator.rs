//! Split evaluation and ranking for 5v5 team balancing
//!
//! This module handles the logic for scoring every candidate partition of a
//! ten-player roster and returning the most balanced splits first.

use crate::balance::combinations::combinations;
use crate::error::{BalanceError, Result};
use crate::profile::GameProfile;
use crate::types::{Player, Role, Split};
use crate::utils::{rank_difference, team_rank_total};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Number of players on each team
pub const TEAM_SIZE: usize = 5;

/// Number of selected players a balance request operates on
pub const ROSTER_SIZE: usize = 2 * TEAM_SIZE;

/// Configuration for split ranking behavior
#[derive(Debug, Clone)]
pub struct BalanceConfig {
    /// Maximum number of ranked splits to return
    pub max_suggestions: usize,
    /// Whether role coverage outranks rank balance for role-aware games
    pub coverage_first: bool,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            coverage_first: true,
        }
    }
}

/// Trait for team balancing algorithms
pub trait TeamBalancer: Send + Sync {
    /// Rank the best splits of a ten-player roster for the given game profile.
    ///
    /// The first player in `players` is fixed as the anchor of team A, which
    /// collapses the mirror-image duplicates of every partition. Input order
    /// only affects tie-break ordering, never the set of splits considered.
    fn balance(&self, players: &[Player], profile: &GameProfile) -> Result<Vec<Split>>;
}

/// Coverage-first split ranker
///
/// Enumerates all C(9,4) = 126 partitions of the roster, scores each by rank
/// difference and (for role-aware games) combined role coverage, and sorts
/// with coverage as the primary key when the policy is enabled. The whole
/// computation is synchronous and allocates a fresh result per call.
#[derive(Debug, Clone)]
pub struct CoverageFirstBalancer {
    config: BalanceConfig,
}

impl CoverageFirstBalancer {
    pub fn new() -> Self {
        Self {
            config: BalanceConfig::default(),
        }
    }

    pub fn with_config(config: BalanceConfig) -> Self {
        Self { config }
    }

    /// Reject rosters the algorithm is not defined for
    fn validate_roster(&self, players: &[Player]) -> Result<()> {
        if players.len() != ROSTER_SIZE {
            return Err(BalanceError::WrongRosterSize {
                expected: ROSTER_SIZE,
                actual: players.len(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(players.len());
        for player in players {
            if !seen.insert(player.id.as_str()) {
                return Err(BalanceError::DuplicatePlayerId {
                    player_id: player.id.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Count the distinct role slots a team collectively fills
    fn team_coverage(team: &[Player]) -> u8 {
        let covered: BTreeSet<Role> = team.iter().flat_map(|p| p.fillable_roles()).collect();
        covered.len() as u8
    }

    /// Build and score one split from its anchor-side team
    fn evaluate_split(players: &[Player], team_a: Vec<Player>, profile: &GameProfile) -> Split {
        let team_b: Vec<Player> = players
            .iter()
            .filter(|p| !team_a.iter().any(|a| a.id == p.id))
            .cloned()
            .collect();

        let rank_diff = rank_difference(team_rank_total(&team_a), team_rank_total(&team_b));
        let total_coverage = profile
            .has_roles
            .then(|| Self::team_coverage(&team_a) + Self::team_coverage(&team_b));

        Split {
            team_a,
            team_b,
            rank_diff,
            total_coverage,
        }
    }
}

impl Default for CoverageFirstBalancer {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamBalancer for CoverageFirstBalancer {
    fn balance(&self, players: &[Player], profile: &GameProfile) -> Result<Vec<Split>> {
        self.validate_roster(players)?;

        let anchor = &players[0];
        let rest = &players[1..];

        let mut splits: Vec<Split> = combinations(rest, TEAM_SIZE - 1)
            .into_iter()
            .map(|combo| {
                let mut team_a = Vec::with_capacity(TEAM_SIZE);
                team_a.push(anchor.clone());
                team_a.extend(combo);
                Self::evaluate_split(players, team_a, profile)
            })
            .collect();
        let candidates = splits.len();

        // Stable sort: ties keep enumeration order.
        let coverage_first = profile.has_roles && self.config.coverage_first;
        splits.sort_by(|a, b| {
            if coverage_first && a.total_coverage != b.total_coverage {
                b.total_coverage.cmp(&a.total_coverage)
            } else {
                a.rank_diff.cmp(&b.rank_diff)
            }
        });
        splits.truncate(self.config.max_suggestions);

        debug!(
            "Ranked {} candidate splits for {}, returning {}",
            candidates,
            profile.key,
            splits.len()
        );
        Ok(splits)
    }
}
