//! Observers that keep or drop round events

use crate::{
    Result,
    ports::Observer,
    session::{Outcome, PlayedMove, Rejection},
    tictactoe::{Board, Symbol},
};

/// A round event as seen by an observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Started { human: Symbol },
    Turn { ply: usize, symbol: Symbol },
    Rejected { input: String, rejection: Rejection },
    Moved { played: PlayedMove, board: Board },
    Finished { outcome: Outcome },
}

/// Records every event in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<RoundEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejection events only
    pub fn rejections(&self) -> Vec<&Rejection> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RoundEvent::Rejected { rejection, .. } => Some(rejection),
                _ => None,
            })
            .collect()
    }

    /// Moves in the order they were applied
    pub fn moves(&self) -> Vec<PlayedMove> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RoundEvent::Moved { played, .. } => Some(*played),
                _ => None,
            })
            .collect()
    }
}

impl Observer for EventLog {
    fn on_round_start(&mut self, _board: &Board, human: Symbol) -> Result<()> {
        self.events.push(RoundEvent::Started { human });
        Ok(())
    }

    fn on_turn(&mut self, ply: usize, symbol: Symbol) -> Result<()> {
        self.events.push(RoundEvent::Turn { ply, symbol });
        Ok(())
    }

    fn on_input_rejected(&mut self, input: &str, rejection: &Rejection) -> Result<()> {
        self.events.push(RoundEvent::Rejected {
            input: input.to_string(),
            rejection: rejection.clone(),
        });
        Ok(())
    }

    fn on_move(&mut self, played: &PlayedMove, board: &Board) -> Result<()> {
        self.events.push(RoundEvent::Moved {
            played: *played,
            board: board.clone(),
        });
        Ok(())
    }

    fn on_round_end(&mut self, outcome: Outcome, _board: &Board) -> Result<()> {
        self.events.push(RoundEvent::Finished { outcome });
        Ok(())
    }
}

/// Ignores all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
