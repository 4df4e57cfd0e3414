//! Minimax search with alpha-beta pruning
//!
//! The engine always plays `opponent` and maximizes: a score of `+1` means
//! `opponent` wins with best play, `-1` means `player` wins and `0` is a
//! draw. The whole remaining game tree is explored; there is no depth limit,
//! no transposition table and no move ordering beyond row-major enumeration.

use tracing::{debug, trace};

use crate::{
    Error, Result,
    config::GameConfig,
    tictactoe::{Board, LineAnalyzer, Move, Symbol},
};

/// Game-theoretic value of a position from the engine's point of view
pub type Score = i32;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// Lower sentinel for alpha and for the maximizer's running best
pub const NEG_INFINITY: Score = Score::MIN;
/// Upper sentinel for beta and for the minimizer's running best
pub const POS_INFINITY: Score = Score::MAX;

/// Outcome of searching one subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the subtree, always one of `WIN`, `DRAW` or `LOSS`
    pub score: Score,
    /// Board reached by the best move; the input board itself when the
    /// input was already terminal
    pub board: Option<Board>,
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,
}

/// A top-level engine decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub score: Score,
    /// Board to continue the game from
    pub board: Board,
    /// Cell the engine filled, `None` if the input board was terminal
    pub chosen: Option<Move>,
    pub stats: SearchStats,
}

/// Minimax search engine bound to one board size
#[derive(Debug, Clone)]
pub struct Engine {
    lines: LineAnalyzer,
    pruning: bool,
}

impl Engine {
    /// Create an engine for the board size and pruning mode in `config`
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lines: LineAnalyzer::new(config.size),
            pruning: config.pruning,
        }
    }

    /// Engine for an arbitrary size with pruning enabled
    pub fn for_size(size: usize) -> Self {
        Self {
            lines: LineAnalyzer::new(size),
            pruning: true,
        }
    }

    /// Engine for the 3×3 board with pruning enabled
    pub fn standard() -> Self {
        Self::for_size(crate::tictactoe::STANDARD_SIZE)
    }

    /// Toggle alpha-beta cut-offs. Scores are identical either way; only the
    /// number of visited nodes changes.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    pub fn lines(&self) -> &LineAnalyzer {
        &self.lines
    }

    /// Search `board` with the given window.
    ///
    /// `maximizing` selects whose turn it is: `true` places `opponent`
    /// (the engine), `false` places `player`.
    ///
    /// # Errors
    ///
    /// - [`Error::SameSymbols`] if `player == opponent`
    /// - [`Error::InvalidConfiguration`] if the board size differs from the engine's
    pub fn search(
        &self,
        board: &Board,
        maximizing: bool,
        alpha: Score,
        beta: Score,
        player: Symbol,
        opponent: Symbol,
    ) -> Result<SearchResult> {
        let mut stats = SearchStats::default();
        self.search_with_stats(board, maximizing, alpha, beta, player, opponent, &mut stats)
    }

    /// Same as [`Engine::search`], accumulating counters into `stats`.
    #[allow(clippy::too_many_arguments)]
    pub fn search_with_stats(
        &self,
        board: &Board,
        maximizing: bool,
        alpha: Score,
        beta: Score,
        player: Symbol,
        opponent: Symbol,
        stats: &mut SearchStats,
    ) -> Result<SearchResult> {
        self.check_inputs(board, player, opponent)?;
        self.minimax(board, maximizing, alpha, beta, player, opponent, stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        player: Symbol,
        opponent: Symbol,
        stats: &mut SearchStats,
    ) -> Result<SearchResult> {
        stats.nodes += 1;

        if self.lines.won_by(board, opponent) {
            return Ok(SearchResult::unchanged(WIN, board));
        }
        if self.lines.won_by(board, player) {
            return Ok(SearchResult::unchanged(LOSS, board));
        }
        let moves = board.available_moves();
        if moves.is_empty() {
            return Ok(SearchResult::unchanged(DRAW, board));
        }

        let (mover, mut best_score) = if maximizing {
            (opponent, NEG_INFINITY)
        } else {
            (player, POS_INFINITY)
        };
        let mut best_board = None;

        for mv in moves {
            let next = board.with_move(mv, mover)?;
            let child = self.minimax(&next, !maximizing, alpha, beta, player, opponent, stats)?;

            // Strict comparison: on equal scores the earlier move is kept.
            if maximizing {
                if child.score > best_score {
                    best_score = child.score;
                    best_board = Some(next);
                }
                alpha = alpha.max(best_score);
            } else {
                if child.score < best_score {
                    best_score = child.score;
                    best_board = Some(next);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && beta <= alpha {
                stats.cutoffs += 1;
                trace!(%mv, alpha, beta, "alpha-beta cut-off");
                break;
            }
        }

        Ok(SearchResult {
            score: best_score,
            board: best_board,
        })
    }

    /// Pick the engine's move on `board`.
    ///
    /// Runs the top-level search with an unbounded window as the maximizer.
    ///
    /// # Errors
    ///
    /// - [`Error::SameSymbols`] if `player == opponent`
    /// - [`Error::InvalidConfiguration`] if the board size differs from the engine's
    pub fn choose(&self, board: &Board, player: Symbol, opponent: Symbol) -> Result<Decision> {
        let mut stats = SearchStats::default();
        let result = self.search_with_stats(
            board,
            true,
            NEG_INFINITY,
            POS_INFINITY,
            player,
            opponent,
            &mut stats,
        )?;

        let next = result.board.unwrap_or_else(|| board.clone());
        let chosen = board.find_changed_cell(&next);

        debug!(
            board = %board.encode(),
            chosen = ?chosen.map(|mv| mv.to_string()),
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            pruning = self.pruning,
            "engine decision"
        );

        Ok(Decision {
            score: result.score,
            board: next,
            chosen,
            stats,
        })
    }

    /// Exact minimax value of every legal engine move on `board`, in
    /// enumeration order.
    pub fn evaluate_moves(
        &self,
        board: &Board,
        player: Symbol,
        opponent: Symbol,
    ) -> Result<Vec<(Move, Score)>> {
        self.check_inputs(board, player, opponent)?;
        if self.lines.is_terminal(board) {
            return Ok(Vec::new());
        }

        let mut values = Vec::new();
        for mv in board.available_moves() {
            let next = board.with_move(mv, opponent)?;
            let child = self.search(&next, false, NEG_INFINITY, POS_INFINITY, player, opponent)?;
            values.push((mv, child.score));
        }
        Ok(values)
    }

    fn check_inputs(&self, board: &Board, player: Symbol, opponent: Symbol) -> Result<()> {
        if player == opponent {
            return Err(Error::SameSymbols);
        }
        if board.size() != self.lines.size() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "engine built for {0}x{0} boards was given a {1}x{1} board",
                    self.lines.size(),
                    board.size()
                ),
            });
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

impl SearchResult {
    fn unchanged(score: Score, board: &Board) -> Self {
        Self {
            score,
            board: Some(board.clone()),
        }
    }
}

/// Search `board` with pruning enabled, sized to the board itself.
///
/// Convenience entry point; callers searching repeatedly should keep an
/// [`Engine`] so the winning lines are built once.
pub fn search(
    board: &Board,
    maximizing: bool,
    alpha: Score,
    beta: Score,
    player: Symbol,
    opponent: Symbol,
) -> Result<SearchResult> {
    Engine::for_size(board.size()).search(board, maximizing, alpha, beta, player, opponent)
}
