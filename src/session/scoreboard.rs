//! Tallies across several rounds

use serde::{Deserialize, Serialize};

use super::round::{Outcome, Round};
use crate::{
    Result,
    config::GameConfig,
    ports::{MoveSource, Observer},
    tictactoe::Symbol,
};

/// Round results from the human's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub victories: usize,
    pub defeats: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Victory => self.victories += 1,
            Outcome::Defeat => self.defeats += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> usize {
        self.victories + self.defeats + self.draws
    }

    /// Running score: victories count +1, defeats -1, draws 0
    pub fn score(&self) -> i64 {
        self.victories as i64 - self.defeats as i64
    }

    /// Fraction of rounds drawn, 0.0 when nothing has been played
    pub fn draw_rate(&self) -> f64 {
        if self.rounds() == 0 {
            0.0
        } else {
            self.draws as f64 / self.rounds() as f64
        }
    }
}

/// Consecutive rounds under one configuration
#[derive(Debug, Clone)]
pub struct Series {
    config: GameConfig,
    scoreboard: Scoreboard,
}

impl Series {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scoreboard: Scoreboard::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Play one fresh round with the human on `human` and record its outcome.
    pub fn play_round(
        &mut self,
        human: Symbol,
        source: &mut dyn MoveSource,
        observer: &mut dyn Observer,
    ) -> Result<Outcome> {
        let mut round = Round::new(&self.config, human)?;
        let outcome = round.play(source, observer)?;
        self.scoreboard.record(outcome);
        Ok(outcome)
    }
}
