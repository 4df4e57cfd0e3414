//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::moves::{self, Move};

/// Side length of the standard board
pub const STANDARD_SIZE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '?' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two marks a side places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Fixed global turn order: X always opens.
    pub const TURN_ORDER: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// Get the other symbol
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Convert symbol to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }

    /// Symbol that moves on the given zero-based ply
    pub fn for_ply(ply: usize) -> Symbol {
        Self::TURN_ORDER[ply % 2]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

impl FromStr for Symbol {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "xs" => Ok(Symbol::X),
            "o" | "os" => Ok(Symbol::O),
            _ => Err(crate::Error::ParseSymbol {
                input: s.to_string(),
            }),
        }
    }
}

/// Square grid of cells, addressed by `(row, col)` in row-major order.
///
/// Boards are values: every transition goes through [`Board::with_move`],
/// which returns a fresh board and leaves the receiver untouched. Search
/// branches therefore never observe each other's placements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`](crate::Error::InvalidDimension) when `size` is zero.
    pub fn empty(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidDimension { size });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Create an empty 3×3 board
    pub fn standard() -> Self {
        Board {
            size: STANDARD_SIZE,
            cells: vec![Cell::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    /// Parse a board from one character per cell.
    ///
    /// Rows may be separated by `/`, `|` or newlines; separators are
    /// ignored, so `"XO./.X./..O"` and `"XO..X...O"` describe the same
    /// board. The cell count must be a perfect square.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell, Move};
    ///
    /// let board = Board::from_string("XO./.X./..O").unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.at(Move::new(1, 1)).unwrap(), Cell::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .collect();

        let size = (chars.len() as f64).sqrt().round() as usize;
        if size == 0 || size * size != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                expected: (size.max(1)) * (size.max(1)),
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(chars.len());
        for (position, &c) in chars.iter().enumerate() {
            cells.push(
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: s.to_string(),
                })?,
            );
        }

        Ok(Board { size, cells })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, mv: Move) -> Result<usize, crate::Error> {
        if mv.row >= self.size || mv.col >= self.size {
            return Err(crate::Error::OutOfRange {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        Ok(mv.row * self.size + mv.col)
    }

    /// Look up the state of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for coordinates outside the board.
    pub fn at(&self, mv: Move) -> Result<Cell, crate::Error> {
        Ok(self.cells[self.index(mv)?])
    }

    /// Unchecked lookup for coordinates already known to be on the board.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Place `symbol` on `mv` and return the resulting board.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`](crate::Error::OutOfRange) if the coordinate is off the board
    /// - [`Error::IllegalMove`](crate::Error::IllegalMove) if the target cell is occupied
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, mv: Move, symbol: Symbol) -> Result<Board, crate::Error> {
        let idx = self.index(mv)?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = self.clone();
        next.cells[idx] = symbol.to_cell();
        Ok(next)
    }

    /// Every empty coordinate in row-major order
    pub fn available_moves(&self) -> Vec<Move> {
        moves::available_moves(self)
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Count the cells holding `symbol`
    pub fn count(&self, symbol: Symbol) -> usize {
        let target = symbol.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Find the first coordinate where two boards of equal size differ.
    ///
    /// Used to recover the move the engine made from the board it returned.
    pub fn find_changed_cell(&self, other: &Board) -> Option<Move> {
        if self.size != other.size {
            return None;
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
            .map(|idx| Move::new(idx / self.size, idx % self.size))
    }

    /// Compact single-line encoding, rows separated by `/`
    pub fn encode(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Human-facing grid with `|` column and `---` row separators.
    pub fn render(&self) -> String {
        let separator = format!("\n{}\n", vec!["---"; self.size].join("|"));
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| format!(" {} ", c.to_char()))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::standard();
        assert_eq!(board.size(), 3);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board, Board::empty(3).unwrap());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Board::empty(0).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidDimension { size: 0 }));
    }

    #[test]
    fn test_with_move() {
        let board = Board::standard();

        let next = board.with_move(Move::new(1, 1), Symbol::X).unwrap();
        assert_eq!(next.at(Move::new(1, 1)).unwrap(), Cell::X);
        // Original untouched
        assert_eq!(board.at(Move::new(1, 1)).unwrap(), Cell::Empty);

        // Move on occupied cell
        let result = next.with_move(Move::new(1, 1), Symbol::O);
        assert!(matches!(
            result,
            Err(crate::Error::IllegalMove { row: 1, col: 1 })
        ));
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::standard();
        assert!(matches!(
            board.at(Move::new(3, 0)),
            Err(crate::Error::OutOfRange { row: 3, col: 0, size: 3 })
        ));
        assert!(matches!(
            board.with_move(Move::new(0, 7), Symbol::O),
            Err(crate::Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_string_with_separators() {
        let a = Board::from_string("XO./.X./..O").unwrap();
        let b = Board::from_string("XO..X...O").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count(Symbol::X), 2);
        assert_eq!(a.count(Symbol::O), 2);
        assert_eq!(a.occupied_count(), 4);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(matches!(
            Board::from_string("XO."),
            Err(crate::Error::InvalidBoardLength { got: 3, .. })
        ));
        assert!(matches!(
            Board::from_string("XO.Z....."),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_matches_from_string() {
        let board = Board::from_string("X.O/.X./O..").unwrap();
        assert_eq!(board.encode(), "X.O/.X./O..");
        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
    }

    #[test]
    fn test_render() {
        let board = Board::from_string("X.O/.../...").unwrap();
        let expected = " X | . | O \n---|---|---\n . | . | . \n---|---|---\n . | . | . ";
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn test_find_changed_cell() {
        let board = Board::standard();
        let next = board.with_move(Move::new(2, 1), Symbol::O).unwrap();
        assert_eq!(board.find_changed_cell(&next), Some(Move::new(2, 1)));
        assert_eq!(board.find_changed_cell(&board), None);
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!("Xs".parse::<Symbol>().unwrap(), Symbol::X);
        assert_eq!("o".parse::<Symbol>().unwrap(), Symbol::O);
        assert!("Ys".parse::<Symbol>().is_err());
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::for_ply(0), Symbol::X);
        assert_eq!(Symbol::for_ply(3), Symbol::O);
    }
}
