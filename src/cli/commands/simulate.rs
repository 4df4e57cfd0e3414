//! Simulate command - the engine against a random opponent

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::{NoopObserver, RandomMoves},
    cli::{
        config::{parse_symbol, resolve_config},
        output::{create_game_progress, print_engine_record, print_heading, print_kv},
    },
    session::{Scoreboard, Series},
    tictactoe::Symbol,
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a random opponent")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Symbol of the random side; alternates X and O when omitted
    #[arg(long, value_parser = parse_symbol)]
    pub symbol: Option<Symbol>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable alpha-beta pruning in the engine
    #[arg(long)]
    pub no_pruning: bool,

    /// Export the tally to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Tally of a simulation, from the random side's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub games: usize,
    pub seed: Option<u64>,
    pub pruning: bool,
    pub scoreboard: Scoreboard,
}

impl SimulationReport {
    /// Save report to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), args.no_pruning, args.symbol)?;
    let pruning = config.pruning;
    let fixed_symbol = config.human_symbol;

    let mut source = match args.seed {
        Some(seed) => RandomMoves::with_seed(seed),
        None => RandomMoves::new(),
    };
    let mut observer = NoopObserver;
    let mut series = Series::new(config)?;

    let progress = create_game_progress(args.games as u64);
    for game in 0..args.games {
        let random_side = fixed_symbol.unwrap_or(Symbol::for_ply(game));
        series.play_round(random_side, &mut source, &mut observer)?;

        let tally = series.scoreboard();
        progress.set_message(format!(
            "engine lost {}, drew {}",
            tally.victories, tally.draws
        ));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let scoreboard = *series.scoreboard();
    print_heading("Simulation results", '=');
    print_kv("Games", args.games);
    print_engine_record(&scoreboard);
    if scoreboard.victories > 0 {
        tracing::warn!(losses = scoreboard.victories, "engine lost to a random opponent");
    }

    if let Some(path) = args.export {
        let report = SimulationReport {
            games: args.games,
            seed: args.seed,
            pruning,
            scoreboard,
        };
        report
            .save(&path)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
