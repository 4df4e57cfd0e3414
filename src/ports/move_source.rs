//! Move source port - where the human side's moves come from

use crate::{
    Result,
    tictactoe::{Board, Symbol},
};

/// Supplies raw move text for the human side of a round.
///
/// Sources return unvalidated text in the `"row,column"` form; the round
/// validates it and asks again on rejection, so a source may be fed
/// arbitrary (even hostile) input.
///
/// # Examples
///
/// ```
/// use noughts::{ports::MoveSource, tictactoe::{Board, Symbol}};
///
/// struct Center;
///
/// impl MoveSource for Center {
///     fn next_input(&mut self, _board: &Board, _symbol: Symbol) -> noughts::Result<Option<String>> {
///         Ok(Some("1,1".to_string()))
///     }
/// }
/// ```
pub trait MoveSource {
    /// Next line of input for `symbol` to play on `board`.
    ///
    /// Returns `Ok(None)` once the source is exhausted (end of stdin, end of
    /// a script); the round then fails with
    /// [`Error::InputExhausted`](crate::Error::InputExhausted).
    fn next_input(&mut self, board: &Board, symbol: Symbol) -> Result<Option<String>>;
}
