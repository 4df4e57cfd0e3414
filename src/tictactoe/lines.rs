//! Winning line enumeration and win/draw detection

use super::{
    board::{Board, STANDARD_SIZE},
    moves::Move,
    Symbol,
};

/// The coordinates of one row, column or diagonal
pub type WinningLine = Vec<Move>;

/// Enumerate the `2n + 2` winning lines of an `n`×`n` board.
///
/// Order: rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal.
pub fn winning_lines(size: usize) -> Vec<WinningLine> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| Move::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Move::new(row, col)).collect());
    }
    lines.push((0..size).map(|i| Move::new(i, i)).collect());
    lines.push((0..size).map(|i| Move::new(i, size - 1 - i)).collect());

    lines
}

/// Win and terminal detection over a precomputed set of winning lines.
///
/// Built once per board size and shared by the search engine and the round
/// orchestrator; the line set is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnalyzer {
    size: usize,
    lines: Vec<WinningLine>,
}

impl LineAnalyzer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            lines: winning_lines(size),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SIZE)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn lines(&self) -> &[WinningLine] {
        &self.lines
    }

    /// Check if `symbol` occupies every cell of some winning line.
    ///
    /// A board of a different size than the analyzer is never won.
    pub fn won_by(&self, board: &Board, symbol: Symbol) -> bool {
        if board.size() != self.size {
            return false;
        }
        let target = symbol.to_cell();
        self.lines
            .iter()
            .any(|line| line.iter().all(|mv| board.cell(mv.row, mv.col) == target))
    }

    /// Get the winner if there is one
    pub fn winner(&self, board: &Board) -> Option<Symbol> {
        Symbol::TURN_ORDER
            .into_iter()
            .find(|&symbol| self.won_by(board, symbol))
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self, board: &Board) -> bool {
        board.available_moves().is_empty()
            && !self.won_by(board, Symbol::X)
            && !self.won_by(board, Symbol::O)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self, board: &Board) -> bool {
        board.is_full() || self.winner(board).is_some()
    }
}

impl Default for LineAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_line_count_and_order() {
        let lines = winning_lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
        assert_eq!(lines[3], vec![Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)]);
        assert_eq!(lines[6], vec![Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)]);
        assert_eq!(lines[7], vec![Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]);

        assert_eq!(winning_lines(4).len(), 10);
        assert!(winning_lines(4).iter().all(|line| line.len() == 4));
    }

    #[test]
    fn test_won_by_horizontal() {
        let analyzer = LineAnalyzer::standard();
        let b = board("XXX/OO./...");
        assert!(analyzer.won_by(&b, Symbol::X));
        assert!(!analyzer.won_by(&b, Symbol::O));
        assert_eq!(analyzer.winner(&b), Some(Symbol::X));
    }

    #[test]
    fn test_won_by_vertical() {
        let analyzer = LineAnalyzer::standard();
        let b = board("OX./OX./O..");
        assert!(analyzer.won_by(&b, Symbol::O));
        assert!(!analyzer.won_by(&b, Symbol::X));
    }

    #[test]
    fn test_won_by_diagonals() {
        let analyzer = LineAnalyzer::standard();
        assert!(analyzer.won_by(&board("X.O/.XO/..X"), Symbol::X));
        assert!(analyzer.won_by(&board("X.O/.O./OX."), Symbol::O));
    }

    #[test]
    fn test_draw_detection() {
        let analyzer = LineAnalyzer::standard();
        let full = board("XOX/XOO/OXX");
        assert!(analyzer.is_draw(&full));
        assert!(analyzer.is_terminal(&full));
        assert_eq!(analyzer.winner(&full), None);

        // Full board with a winner is not a draw
        let won = board("XXX/OOX/XOO");
        assert!(!analyzer.is_draw(&won));
        assert!(analyzer.is_terminal(&won));

        let open = board("XO./.../...");
        assert!(!analyzer.is_draw(&open));
        assert!(!analyzer.is_terminal(&open));
    }

    #[test]
    fn test_other_sizes_never_won() {
        let analyzer = LineAnalyzer::standard();
        // O fills the first three cells of the top row of a 4x4 board.
        let b4 = board("OOO./..../..../....");
        assert!(!analyzer.won_by(&b4, Symbol::O));
        assert!(LineAnalyzer::new(4).winner(&b4).is_none());
    }

    #[test]
    fn test_single_cell_board() {
        let analyzer = LineAnalyzer::new(1);
        assert_eq!(analyzer.lines().len(), 4);
        let b = Board::empty(1)
            .unwrap()
            .with_move(Move::new(0, 0), Symbol::O)
            .unwrap();
        assert!(analyzer.won_by(&b, Symbol::O));
    }
}
