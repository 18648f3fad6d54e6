//! Toolkit configuration module.
//!
//! Handles loading and validating `config.toml`. Configuration covers the
//! data-driven knobs: which category labels the filter UI offers, and how
//! many entries a leaderboard shows. The ranking weights are business rules,
//! not configuration — they live as constants in [`crate::ranking`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [filters]
//! categories = ["Chicken", "Mutton", "Beef", "Fish"]
//!
//! [leaderboard]
//! size = 10
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Toolkit configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Category filter settings.
    pub filters: FiltersConfig,
    /// Leaderboard view settings.
    pub leaderboard: LeaderboardConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filters.categories.is_empty() {
            return Err(ConfigError::Validation(
                "filters.categories must not be empty".into(),
            ));
        }
        if self.filters.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "filters.categories entries must not be blank".into(),
            ));
        }
        if self.leaderboard.size == 0 {
            return Err(ConfigError::Validation(
                "leaderboard.size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// True if `label` is one of the configured categories (case-insensitive).
    pub fn is_known_category(&self, label: &str) -> bool {
        self.filters
            .categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(label.trim()))
    }
}

/// Category filter settings.
///
/// The label set is deployment data, not logic: a site serving a different
/// cuisine swaps this list without touching the matching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiltersConfig {
    pub categories: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            categories: ["Chicken", "Mutton", "Beef", "Fish"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Leaderboard view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaderboardConfig {
    /// Entries shown after ranking.
    pub size: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self { size: 10 }
    }
}

/// Load configuration, or defaults when no file exists at `path`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# mandhi-town configuration
# All options are optional - defaults shown below.

[filters]
# Category labels offered as filters. Matching is a case-insensitive
# substring check against each restaurant's specialties.
categories = ["Chicken", "Mutton", "Beef", "Fish"]

[leaderboard]
# Entries shown after ranking.
size = 10
"#
    .to_string()
}
