//! Match configuration, loadable from TOML.

use std::path::Path;

use checkers_core::SearchLimits;
use minimax_engine::{PruningMode, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Full turns (one move by each side) before a game is declared drawn
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Pruning rule for `minimax` engines
    pub pruning: PruningMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_turns: 100,
            alternate_colors: true,
            verbose: true,
            pruning: PruningMode::default(),
        }
    }
}

impl MatchConfig {
    /// Parse a config; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub(crate) fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }

    /// Minimax settings matching this match's depth and pruning rule.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            pruning: self.pruning,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
