//! Single-round state machine

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::input::{InputVerdict, validate_input};
use crate::{
    Error, Result,
    config::GameConfig,
    ports::{MoveSource, Observer},
    search::Engine,
    tictactoe::{Board, Move, Symbol},
};

/// Result of a round from the human's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
    Draw,
}

impl Outcome {
    /// Contribution to the running score: +1, -1 or 0
    pub fn score(self) -> i64 {
        match self {
            Outcome::Victory => 1,
            Outcome::Defeat => -1,
            Outcome::Draw => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => write!(f, "Victory"),
            Outcome::Defeat => write!(f, "Defeat"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingHumanMove,
    AwaitingEngineMove,
    Finished(Outcome),
}

/// Which side made a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Human,
    Engine,
}

/// One applied ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Zero-based ply number
    pub ply: usize,
    pub symbol: Symbol,
    pub actor: Actor,
    pub mv: Move,
}

/// One game between the human and the engine.
///
/// Turns follow the fixed order X, O, X, ... whichever symbol the human
/// picked. After every move only the mover can have completed a line, so
/// only the mover is checked; once `size²` plies have been played without
/// a line the round is a draw.
#[derive(Debug, Clone)]
pub struct Round {
    engine: Engine,
    board: Board,
    human: Symbol,
    ply: usize,
    state: RoundState,
    history: Vec<PlayedMove>,
}

impl Round {
    /// Start a round on an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` does not validate.
    pub fn new(config: &GameConfig, human: Symbol) -> Result<Self> {
        config.validate()?;
        let board = Board::empty(config.size)?;
        Ok(Self::with_engine(Engine::new(config), board, human))
    }

    fn with_engine(engine: Engine, board: Board, human: Symbol) -> Self {
        let mut round = Self {
            engine,
            board,
            human,
            ply: 0,
            state: RoundState::AwaitingHumanMove,
            history: Vec::new(),
        };
        round.state = round.turn_state();
        round
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn human(&self) -> Symbol {
        self.human
    }

    pub fn engine_symbol(&self) -> Symbol {
        self.human.opponent()
    }

    /// Number of plies played so far
    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    fn max_plies(&self) -> usize {
        self.board.size() * self.board.size()
    }

    fn turn_state(&self) -> RoundState {
        if Symbol::for_ply(self.ply) == self.human {
            RoundState::AwaitingHumanMove
        } else {
            RoundState::AwaitingEngineMove
        }
    }

    fn record(&mut self, actor: Actor, symbol: Symbol, mv: Move, win: Outcome) {
        self.history.push(PlayedMove {
            ply: self.ply,
            symbol,
            actor,
            mv,
        });

        if self.engine.lines().won_by(&self.board, symbol) {
            self.state = RoundState::Finished(win);
            return;
        }

        self.ply += 1;
        self.state = if self.ply >= self.max_plies() {
            RoundState::Finished(Outcome::Draw)
        } else {
            self.turn_state()
        };
    }

    /// Apply a validated human move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the round has finished
    /// - [`Error::NotYourTurn`] if the engine is to move
    /// - [`Error::IllegalMove`] / [`Error::OutOfRange`] from the board; the
    ///   round is left unchanged
    pub fn submit_human_move(&mut self, mv: Move) -> Result<RoundState> {
        match self.state {
            RoundState::Finished(_) => return Err(Error::GameOver),
            RoundState::AwaitingEngineMove => {
                return Err(Error::NotYourTurn {
                    expected: self.engine_symbol(),
                });
            }
            RoundState::AwaitingHumanMove => {}
        }

        self.board = self.board.with_move(mv, self.human)?;
        self.record(Actor::Human, self.human, mv, Outcome::Victory);
        Ok(self.state)
    }

    /// Let the engine search and apply its move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the round has finished
    /// - [`Error::NotYourTurn`] if the human is to move
    pub fn play_engine_move(&mut self) -> Result<Move> {
        match self.state {
            RoundState::Finished(_) => return Err(Error::GameOver),
            RoundState::AwaitingHumanMove => {
                return Err(Error::NotYourTurn {
                    expected: self.human,
                });
            }
            RoundState::AwaitingEngineMove => {}
        }

        let engine_symbol = self.engine_symbol();
        let decision = self.engine.choose(&self.board, self.human, engine_symbol)?;
        let mv = decision.chosen.ok_or(Error::GameOver)?;

        self.board = decision.board;
        self.record(Actor::Engine, engine_symbol, mv, Outcome::Defeat);
        Ok(mv)
    }

    /// Drive the round to completion.
    ///
    /// Human plies pull text from `source` until a line validates; each
    /// rejection is reported to `observer` and the board is left as it was.
    pub fn play(
        &mut self,
        source: &mut dyn MoveSource,
        observer: &mut dyn Observer,
    ) -> Result<Outcome> {
        observer.on_round_start(&self.board, self.human)?;
        info!(human = %self.human, size = self.board.size(), "round started");

        loop {
            let actor = match self.state {
                RoundState::Finished(outcome) => {
                    info!(%outcome, plies = self.history.len(), "round finished");
                    observer.on_round_end(outcome, &self.board)?;
                    return Ok(outcome);
                }
                RoundState::AwaitingHumanMove => Actor::Human,
                RoundState::AwaitingEngineMove => Actor::Engine,
            };

            observer.on_turn(self.ply, Symbol::for_ply(self.ply))?;

            match actor {
                Actor::Human => {
                    let mv = self.read_human_move(source, observer)?;
                    self.submit_human_move(mv)?;
                }
                Actor::Engine => {
                    self.play_engine_move()?;
                }
            }

            if let Some(played) = self.history.last() {
                observer.on_move(played, &self.board)?;
            }
        }
    }

    fn read_human_move(
        &self,
        source: &mut dyn MoveSource,
        observer: &mut dyn Observer,
    ) -> Result<Move> {
        loop {
            let Some(raw) = source.next_input(&self.board, self.human)? else {
                return Err(Error::InputExhausted);
            };

            match validate_input(&raw, &self.board) {
                InputVerdict::Validated(mv) => return Ok(mv),
                InputVerdict::Rejected(rejection) => {
                    debug!(input = %raw.trim(), %rejection, "rejected human input");
                    observer.on_input_rejected(&raw, &rejection)?;
                }
            }
        }
    }
}
