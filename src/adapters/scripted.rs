//! Pre-recorded input, one line per prompt

use std::collections::VecDeque;

use crate::{
    Result,
    ports::MoveSource,
    tictactoe::{Board, Symbol},
};

/// Replays a fixed list of input lines, then reports exhaustion
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    inputs: VecDeque<String>,
}

impl ScriptedMoves {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_input(&mut self, _board: &Board, _symbol: Symbol) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }
}
