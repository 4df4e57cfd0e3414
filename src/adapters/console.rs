//! Text console adapters
//!
//! Both adapters are generic over their reader/writer so the same code
//! drives a terminal (`stdin`/`stdout`) and in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::{
    Result,
    ports::{MoveSource, Observer},
    session::{Actor, Outcome, PlayedMove, Rejection},
    tictactoe::{Board, Symbol},
};

/// Write `prompt`, then read one line with the trailing newline removed.
///
/// Returns `Ok(None)` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads human moves as `row,column` lines
pub struct ConsoleMoveSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleMoveSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoveSource<R, W> {
    fn next_input(&mut self, _board: &Board, _symbol: Symbol) -> Result<Option<String>> {
        prompt_line(&mut self.reader, &mut self.writer, "\nPlayer's Move: ")
    }
}

/// Prints boards, turn numbers and round results
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.out, "\nBoard:\n\n{}\n", board.render())?;
        Ok(())
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_round_start(&mut self, board: &Board, human: Symbol) -> Result<()> {
        writeln!(self.out, "\nYou are playing {human}s.")?;
        self.show_board(board)
    }

    fn on_turn(&mut self, ply: usize, _symbol: Symbol) -> Result<()> {
        writeln!(self.out, "Turn # {}", ply + 1)?;
        Ok(())
    }

    fn on_input_rejected(&mut self, _input: &str, rejection: &Rejection) -> Result<()> {
        writeln!(
            self.out,
            "\nInvalid input ({rejection}); please try again.\nReminder: enter an input in the form of 'row,column' (in base 0)\n"
        )?;
        Ok(())
    }

    fn on_move(&mut self, played: &PlayedMove, board: &Board) -> Result<()> {
        if played.actor == Actor::Engine {
            writeln!(self.out, "\nComputer plays {}.", played.mv)?;
        }
        self.show_board(board)
    }

    fn on_round_end(&mut self, outcome: Outcome, _board: &Board) -> Result<()> {
        writeln!(self.out, "{outcome}.")?;
        Ok(())
    }
}
