//! Random legal moves, used as a stand-in human for simulations

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{
    Result,
    ports::MoveSource,
    tictactoe::{Board, Symbol},
};

/// Plays a uniformly random empty cell each turn
pub struct RandomMoves {
    rng: StdRng,
}

impl RandomMoves {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random source with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoves {
    fn next_input(&mut self, board: &Board, _symbol: Symbol) -> Result<Option<String>> {
        let moves = board.available_moves();
        Ok(moves.choose(&mut self.rng).map(|mv| mv.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Move;

    #[test]
    fn test_only_picks_empty_cells() {
        let board = Board::from_string("XOX/O.X/OXO").unwrap();
        let mut source = RandomMoves::with_seed(7);
        for _ in 0..10 {
            let raw = source.next_input(&board, Symbol::X).unwrap().unwrap();
            assert_eq!(raw.parse::<Move>().unwrap(), Move::new(1, 1));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let board = Board::standard();
        let mut a = RandomMoves::with_seed(42);
        let mut b = RandomMoves::with_seed(42);
        for _ in 0..5 {
            assert_eq!(
                a.next_input(&board, Symbol::O).unwrap(),
                b.next_input(&board, Symbol::O).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_exhausts() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(RandomMoves::with_seed(1).next_input(&board, Symbol::X).unwrap(), None);
    }
}
