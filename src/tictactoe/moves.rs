//! Move coordinates, text parsing and legal move enumeration

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};

/// A `(row, col)` coordinate, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Parses the `"row,column"` form typed by a human player.
///
/// Only the shape of the text is checked here; whether the coordinate fits
/// a particular board is the board's concern.
impl FromStr for Move {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| crate::Error::ParseMove {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| parse_err("expected 'row,column'"))?;

        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| parse_err("row is not a non-negative integer"))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|_| parse_err("column is not a non-negative integer"))?;

        Ok(Move { row, col })
    }
}

/// Every empty coordinate of `board`, in row-major order.
///
/// The order is part of the contract: the search engine breaks ties in
/// favour of the first move enumerated here. An empty result means the
/// board is full.
pub fn available_moves(board: &Board) -> Vec<Move> {
    let size = board.size();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Cell::Empty)
        .map(|(idx, _)| Move::new(idx / size, idx % size))
        .collect()
}
