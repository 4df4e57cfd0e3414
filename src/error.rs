//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Symbol;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell {row},{col} is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("coordinate {row},{col} is out of range (must be within 0..{size})")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("board dimension {size} is invalid (must be at least 1)")]
    InvalidDimension { size: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("invalid symbol '{input}' (expected 'X', 'Xs', 'O' or 'Os')")]
    ParseSymbol { input: String },

    #[error("player and opponent must use different symbols")]
    SameSymbols,

    #[error("it is not the human's turn: waiting on {expected}")]
    NotYourTurn { expected: Symbol },

    #[error("round already over")]
    GameOver,

    #[error("move source ran out of input before the round finished")]
    InputExhausted,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
