//! Tic-Tac-Toe game model: board, winning lines and move enumeration

pub mod board;
pub mod lines;
pub mod moves;

pub use board::{Board, Cell, STANDARD_SIZE, Symbol};
pub use lines::{LineAnalyzer, WinningLine, winning_lines};
pub use moves::{Move, available_moves};
