//! Scheduler configuration.
//!
//! Load search limits from TOML so callers can bound schedule
//! generation without code changes.
//!
//! # Examples
//!
//! ```
//! use section_schedule::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     [search]
//!     max_nodes = 50000
//! "#).unwrap();
//!
//! assert_eq!(config.search.max_nodes, Some(50_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use section_schedule::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::load("scheduler.toml").unwrap_or_default();
//! assert!(config.search.max_nodes.is_none());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Backtracking search limits.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Backtracking search limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum candidate placements to try before giving up.
    ///
    /// `None` searches exhaustively. Exhausting the budget reports the
    /// request as unsatisfiable.
    #[serde(default)]
    pub max_nodes: Option<u64>,
}

impl SchedulerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the search node budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.search.max_nodes = Some(max_nodes);
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_nodes == Some(0) {
            return Err(ConfigError::Invalid(
                "search.max_nodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = SchedulerConfig::default();
        assert!(config.search.max_nodes.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_toml_max_nodes() {
        let config = SchedulerConfig::from_toml_str(
            r#"
            [search]
            max_nodes = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.search.max_nodes, Some(1000));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let err = SchedulerConfig::from_toml_str("[search]\nmax_nodes = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SchedulerConfig::from_toml_str("[search\nmax_nodes = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SchedulerConfig::load("/nonexistent/scheduler.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::new().with_max_nodes(64);
        assert_eq!(config.search.max_nodes, Some(64));
    }
}
