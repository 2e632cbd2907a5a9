//! Error types for the team balancing service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific balancing scenarios
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("Roster must contain exactly {expected} players, got {actual}")]
    WrongRosterSize { expected: usize, actual: usize },

    #[error("Duplicate player id: {player_id}")]
    DuplicatePlayerId { player_id: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Roster selection is full ({capacity} players)")]
    RosterFull { capacity: usize },

    #[error("Invalid role {role} for player {player_id}")]
    InvalidRole { player_id: String, role: u8 },

    #[error("Unknown game profile: {key}")]
    UnknownProfile { key: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
