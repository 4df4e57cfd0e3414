//! noughts CLI - play tic-tac-toe against an optimal opponent
//!
//! This CLI provides:
//! - Interactive rounds on the terminal with a running score
//! - Analysis of a single position (move values, node counts)
//! - Simulated matches against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against a minimax engine", long_about = None)]
struct Cli {
    /// Show engine and round diagnostics on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(noughts::cli::commands::play::PlayArgs),

    /// Analyze a position
    Solve(noughts::cli::commands::solve::SolveArgs),

    /// Pit the engine against a random opponent
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::logging::init(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}
