use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`](crate::game::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{key} must be at least {min}, got {value}")]
    TooSmall {
        key: &'static str,
        min: u32,
        value: u32,
    },

    #[error("{key} must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("INITIAL_SIZE {size} does not fit a board {width} columns wide")]
    SnakeDoesNotFit { size: usize, width: u16 },
}

/// Errors raised by the snake body and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("snake needs at least 2 segments, got {0}")]
    SnakeTooShort(usize),

    #[error("snake body cannot be empty")]
    EmptyBody,

    #[error("segment index {index} out of range for a snake of length {len}")]
    SegmentOutOfRange { index: usize, len: usize },

    #[error("no free interior cell left for food")]
    BoardFull,
}
