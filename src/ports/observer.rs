//! Observer port - notification of round events
//!
//! Observers turn round progress into output (console boards, logs,
//! recorded event lists) without the orchestrator knowing about any of it.

use crate::{
    Result,
    session::{Outcome, PlayedMove, Rejection},
    tictactoe::{Board, Symbol},
};

/// Observer trait for monitoring a round
///
/// Methods are called in this order:
/// 1. `on_round_start` once
/// 2. for each ply:
///    - `on_turn`
///    - `on_input_rejected` for every rejected human input (human plies only)
///    - `on_move`
/// 3. `on_round_end` once
///
/// Every method defaults to doing nothing.
pub trait Observer {
    fn on_round_start(&mut self, _board: &Board, _human: Symbol) -> Result<()> {
        Ok(())
    }

    /// Called before a ply is played. `ply` is zero-based.
    fn on_turn(&mut self, _ply: usize, _symbol: Symbol) -> Result<()> {
        Ok(())
    }

    fn on_input_rejected(&mut self, _input: &str, _rejection: &Rejection) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied; `board` is the new board.
    fn on_move(&mut self, _played: &PlayedMove, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_round_end(&mut self, _outcome: Outcome, _board: &Board) -> Result<()> {
        Ok(())
    }
}
