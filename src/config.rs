//! Match configuration loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid config describing the
//! standard board with GRAVE playing plain UCT.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{BoardConfig, LayoutError};
use crate::search::{SearchConfig, SearchError, Strategy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("player {player}: {source}")]
    Search {
        player: String,
        #[source]
        source: SearchError,
    },

    #[error("win threshold {threshold} is outside 1..={pieces} (pieces per side)")]
    InvalidWinThreshold { threshold: usize, pieces: usize },

    #[error("move cap must be at least 1")]
    ZeroMoveCap,
}

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub strategy: Strategy,
    #[serde(default)]
    pub search: SearchConfig,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        PlayerConfig {
            name: name.into(),
            strategy,
            search: SearchConfig::default(),
        }
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub board: BoardConfig,
    /// Pieces a side needs in its goal to win.
    pub win_threshold: usize,
    /// Total moves (both sides, passes included) before the match is scored.
    pub max_moves: u32,
    /// `players[0]` starts in the top apex and moves first.
    pub players: [PlayerConfig; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            board: BoardConfig::default(),
            win_threshold: 6,
            max_moves: 200,
            players: [
                PlayerConfig::new("grave", Strategy::Grave),
                PlayerConfig::new("uct", Strategy::Uct),
            ],
        }
    }
}

impl MatchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        let pieces = self.board.pieces_per_side();
        if self.win_threshold == 0 || self.win_threshold > pieces {
            return Err(ConfigError::InvalidWinThreshold {
                threshold: self.win_threshold,
                pieces,
            });
        }
        if self.max_moves == 0 {
            return Err(ConfigError::ZeroMoveCap);
        }
        for player in &self.players {
            if player.strategy.is_tree_search() {
                player.search.validate().map_err(|source| ConfigError::Search {
                    player: player.name.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}
