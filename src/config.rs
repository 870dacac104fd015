//! Engine Configuration
//!
//! Tunables for the search pipeline and the connectivity graph. Everything
//! has a sensible default; a TOML file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub graph: GraphConfig,
}

/// Match pipeline tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this short-circuit to an empty result set.
    pub min_term_len: usize,
    /// Minimum normalized similarity for the edit-distance stage.
    pub fuzzy_threshold: f64,
    /// Base threshold for typo suggestions; candidates must clear this
    /// plus 0.1.
    pub suggestion_threshold: f64,
    /// Result counts at or below this take the cheap post-processing path.
    pub small_result_cutoff: usize,
    /// Hard cap on displayed results for large result sets.
    pub display_cap: usize,
}

/// Connectivity graph tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Bound on memoized shortest-path entries; oldest evicted first.
    pub path_cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_term_len: 2,
            fuzzy_threshold: 0.7,
            suggestion_threshold: 0.5,
            small_result_cutoff: 20,
            display_cap: 30,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path_cache_capacity: 1000,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file is missing or unparseable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded engine config");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
