use std::path::PathBuf;

use checkers_core::Move;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("engine played illegal move {mv} on turn {turn}")]
    IllegalEngineMove { mv: Move, turn: u32 },
}

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("input closed before a move was entered")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid match config: {0}")]
    Parse(#[from] toml::de::Error),
}
