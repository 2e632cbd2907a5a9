//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! scrim-room balancing service, including environment variable loading,
//! TOML file loading, and validation.

use crate::balance::BalanceConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub balance: BalanceSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Balancing-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSettings {
    /// Maximum number of ranked splits returned per request
    pub max_suggestions: usize,
    /// Whether role coverage outranks rank balance for role-aware games
    pub coverage_first: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "scrim-room".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            coverage_first: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(max) = env::var("BALANCE_MAX_SUGGESTIONS") {
            config.balance.max_suggestions = max
                .parse()
                .map_err(|_| anyhow!("Invalid BALANCE_MAX_SUGGESTIONS value: {}", max))?;
        }
        if let Ok(coverage_first) = env::var("BALANCE_COVERAGE_FIRST") {
            config.balance.coverage_first = coverage_first
                .parse()
                .map_err(|_| anyhow!("Invalid BALANCE_COVERAGE_FIRST value: {}", coverage_first))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse config file")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Ranking configuration for the balancer
    pub fn balance_config(&self) -> BalanceConfig {
        BalanceConfig {
            max_suggestions: self.balance.max_suggestions,
            coverage_first: self.balance.coverage_first,
        }
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.balance.max_suggestions == 0 {
        return Err(anyhow!("Max suggestions must be greater than 0"));
    }

    Ok(())
}
