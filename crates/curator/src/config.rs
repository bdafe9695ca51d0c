//! Configuration loading for the Curator.
//!
//! All curator settings are loaded from a TOML configuration file. Every
//! section is optional and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Complete Curator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Validation and year filtering
    #[serde(default)]
    pub filter: FilterConfig,
    /// Cross-source deduplication
    #[serde(default)]
    pub merge: MergeConfig,
    /// Relevance scoring multipliers
    #[serde(default)]
    pub relevance: RelevanceConfig,
    /// Category weight overrides, keyed by category display name
    #[serde(default)]
    pub categories: BTreeMap<String, f32>,
}

impl CuratorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded curator config");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Validation and year filtering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Oldest year kept when parsing source payloads
    pub min_year: i64,
    /// Keep only events inside the recent window
    pub recent_only: bool,
    /// Width of the recent window in years
    pub recent_window_years: i64,
    /// Minimum number of words for an event to be valid
    pub min_words: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_year: 1924,
            recent_only: false,
            recent_window_years: 100,
            min_words: 4,
        }
    }
}

/// Deduplication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Characters of normalized text used in the dedup key
    pub key_length: usize,
    /// Jaccard similarity above which two same-year events are one event
    pub similarity_threshold: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            key_length: 80,
            similarity_threshold: 0.8,
        }
    }
}

/// Relevance scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Multiplier for events confirmed by several sources
    pub verified: f32,
    /// Multiplier for events mentioning a significance keyword
    pub significance: f32,
    /// Multiplier for long descriptions
    pub long_text: f32,
    /// Multiplier for medium descriptions
    pub medium_text: f32,
    /// Characters above which a description is long
    pub long_text_chars: usize,
    /// Characters above which a description is medium
    pub medium_text_chars: usize,
    /// Anniversaries are multiples of this many years
    pub anniversary_step: i64,
    /// Anniversaries older than this are ignored
    pub anniversary_horizon: i64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            verified: 1.5,
            significance: 1.3,
            long_text: 1.2,
            medium_text: 1.1,
            long_text_chars: 200,
            medium_text_chars: 100,
            anniversary_step: 25,
            anniversary_horizon: 200,
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Curator Configuration

[filter]
min_year = 1924
recent_only = false
recent_window_years = 100
min_words = 4

[merge]
key_length = 80
similarity_threshold = 0.8

[relevance]
verified = 1.5
significance = 1.3
long_text = 1.2
medium_text = 1.1
long_text_chars = 200
medium_text_chars = 100
anniversary_step = 25
anniversary_horizon = 200

[categories]
"Politics & Government" = 1.2
"War & Conflict" = 1.0
"Science & Technology" = 1.1
"Arts & Culture" = 0.9
"Sports & Recreation" = 0.8
"Medicine & Health" = 1.0
"Indian History" = 1.3
"Disasters & Accidents" = 1.0
"#
    .to_string()
}
