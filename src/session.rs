//! Round orchestration: turn sequencing, input validation and scoring
//!
//! The orchestrator owns no search logic. It alternates the fixed turn
//! order (X then O), routes each ply to the human's [`MoveSource`] or the
//! [`Engine`], and stops as soon as the mover completes a line or the board
//! fills up.
//!
//! [`MoveSource`]: crate::ports::MoveSource
//! [`Engine`]: crate::search::Engine

pub mod input;
pub mod round;
pub mod scoreboard;

pub use input::{InputVerdict, Rejection, validate_input};
pub use round::{Actor, Outcome, PlayedMove, Round, RoundState};
pub use scoreboard::{Scoreboard, Series};
