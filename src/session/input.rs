//! Validation of human move text against the current board

use std::fmt;

use crate::tictactoe::{Board, Cell, Move};

/// Why a line of input was not accepted as a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not of the form `row,column`
    Malformed { reason: String },
    /// Well-formed, but off the board
    OutOfRange { mv: Move, size: usize },
    /// Target cell already holds a symbol
    Occupied { mv: Move },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Malformed { reason } => write!(f, "{reason}"),
            Rejection::OutOfRange { mv, size } => {
                write!(f, "{mv} is off the board (indices run from 0 to {})", size - 1)
            }
            Rejection::Occupied { mv } => write!(f, "{mv} is already taken"),
        }
    }
}

/// Result of checking one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputVerdict {
    Validated(Move),
    Rejected(Rejection),
}

/// Check raw `"row,column"` text against `board`.
///
/// Never touches the board; a rejected input simply leads to a new prompt.
pub fn validate_input(raw: &str, board: &Board) -> InputVerdict {
    let mv = match raw.parse::<Move>() {
        Ok(mv) => mv,
        Err(crate::Error::ParseMove { reason, .. }) => {
            return InputVerdict::Rejected(Rejection::Malformed { reason });
        }
        Err(e) => {
            return InputVerdict::Rejected(Rejection::Malformed {
                reason: e.to_string(),
            });
        }
    };

    match board.at(mv) {
        Ok(Cell::Empty) => InputVerdict::Validated(mv),
        Ok(_) => InputVerdict::Rejected(Rejection::Occupied { mv }),
        Err(_) => InputVerdict::Rejected(Rejection::OutOfRange {
            mv,
            size: board.size(),
        }),
    }
}
