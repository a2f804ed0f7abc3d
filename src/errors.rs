//! Error types
//!
//! Three families, handled differently by callers:
//! - [`GuessError`]: rejected input, reported to the player, state unchanged
//! - [`ConfigError`]: fatal at startup
//! - [`StorageError`]: logged and swallowed, the game starts fresh

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A submitted guess was rejected before scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("The word must have {expected} letters (got {actual})")]
    WrongLength { expected: usize, actual: usize },
    #[error("The word must start with {expected}")]
    FirstLetterMismatch { expected: char, actual: char },
    #[error("The word may only contain letters A to Z")]
    InvalidLetters,
    #[error("The game is over, come back tomorrow")]
    Finished,
}

/// Invalid configuration, detected at load time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read word file {}: {source}", path.display())]
    ReadWordFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key-value storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),
    #[error("saved game does not fit today's puzzle: {0}")]
    Inconsistent(String),
    #[error("storage unavailable")]
    Unavailable,
}
