//! Play command - interactive rounds against the engine on the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    adapters::{ConsoleMoveSource, ConsoleObserver, prompt_line},
    cli::config::{parse_symbol, resolve_config},
    session::Series,
    tictactoe::Symbol,
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the engine")]
pub struct PlayArgs {
    /// Symbol you play (`x`/`xs` or `o`/`os`); asked each round when omitted
    #[arg(long, short = 's', value_parser = parse_symbol)]
    pub symbol: Option<Symbol>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable alpha-beta pruning in the engine
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), args.no_pruning, args.symbol)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Tic-Tac-Toe");

    let mut series = Series::new(config)?;
    loop {
        let human = match series.config().human_symbol {
            Some(symbol) => symbol,
            None => ask_symbol(&mut input, &mut stdout)?,
        };

        {
            let mut source = ConsoleMoveSource::new(&mut input, io::stdout());
            let mut observer = ConsoleObserver::new(io::stdout());
            series.play_round(human, &mut source, &mut observer)?;
        }

        if !ask_play_again(&mut input, &mut stdout)? {
            break;
        }
    }

    let scoreboard = series.scoreboard();
    println!(
        "\nFinal score: {} ({} won, {} lost, {} drawn)",
        scoreboard.score(),
        scoreboard.victories,
        scoreboard.defeats,
        scoreboard.draws
    );
    Ok(())
}

fn ask_symbol<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Symbol> {
    loop {
        let Some(line) = prompt_line(input, out, "\nXs or Os? ")? else {
            bail!("input closed before a symbol was chosen");
        };
        match line.parse::<Symbol>() {
            Ok(symbol) => return Ok(symbol),
            Err(_) => writeln!(out, "\nInvalid input. Reminder: enter either 'Xs' or 'Os'.")?,
        }
    }
}

/// `Ok(false)` on `N` or end of input
fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    loop {
        let Some(line) = prompt_line(input, out, "\nPlay Again (Y or N)? ")? else {
            return Ok(false);
        };
        match line.trim() {
            "Y" | "y" => return Ok(true),
            "N" | "n" => return Ok(false),
            _ => writeln!(out, "\nInvalid input. Reminder: enter either 'Y' or 'N'.")?,
        }
    }
}
