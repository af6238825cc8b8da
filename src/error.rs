//! Error types
//!
//! `GameError` comes from the game engine adapter, `SearchError` from the
//! search itself (game errors pass through it unchanged) and `ConfigError`
//! from loading a `SearchConfig`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the game engine collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A move that is not legal in the current position was applied
    #[error("Illegal move {uci} in position {fen}")]
    IllegalMove { uci: String, fen: String },

    /// `undo_move` was called with a move other than the last one made
    #[error("Cannot undo {requested}: last move made was {last}")]
    UndoMismatch { requested: String, last: String },

    /// `undo_move` was called with an empty move stack
    #[error("Cannot undo {requested}: no move has been made")]
    NothingToUndo { requested: String },

    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Errors returned by `Searcher::select_move`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root position has no legal moves (checkmate or stalemate)
    #[error("No legal moves in the root position")]
    NoLegalMoves,

    #[error("Search depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Errors raised while loading or validating a `SearchConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type SearchResult<T> = Result<T, SearchError>;
