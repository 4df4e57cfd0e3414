//! Solve command - engine analysis of a single position

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    GameConfig,
    cli::{
        config::parse_symbol,
        output::{print_heading, print_kv, print_search_stats},
    },
    search::{Engine, Score},
    tictactoe::{Board, Move, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Show the engine's move and the value of every move for a position")]
pub struct SolveArgs {
    /// Board, one character per cell (`.`, `X`, `O`); rows may be separated by `/`
    pub board: String,

    /// Symbol the engine plays; defaults to the side to move
    #[arg(long, value_parser = parse_symbol)]
    pub engine: Option<Symbol>,

    /// Also search without pruning and compare node counts
    #[arg(long)]
    pub compare: bool,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MoveValue {
    #[serde(rename = "move")]
    mv: Move,
    score: Score,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    engine: Symbol,
    score: Score,
    chosen: Option<Move>,
    nodes: u64,
    cutoffs: u64,
    unpruned_nodes: Option<u64>,
    moves: Vec<MoveValue>,
}

/// Side to move under the fixed X-first turn order
fn side_to_move(board: &Board) -> Symbol {
    if board.count(Symbol::X) > board.count(Symbol::O) {
        Symbol::O
    } else {
        Symbol::X
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    GameConfig::new().with_size(board.size()).validate()?;

    let engine_symbol = args.engine.unwrap_or_else(|| side_to_move(&board));
    let player = engine_symbol.opponent();
    let engine = Engine::for_size(board.size());

    print_heading(&format!("Position analysis ({engine_symbol} to play)"), '=');
    println!("\n{}\n", board.render());

    let decision = engine.choose(&board, player, engine_symbol)?;
    let values = engine.evaluate_moves(&board, player, engine_symbol)?;

    print_heading("Move values (+1 engine wins, 0 draw, -1 engine loses)", '-');
    if values.is_empty() {
        println!("  (position is terminal)");
    }
    for (mv, score) in &values {
        let marker = if Some(*mv) == decision.chosen { "  <- chosen" } else { "" };
        println!("  {mv}  {score:+}{marker}");
    }

    print_heading("Decision", '-');
    match decision.chosen {
        Some(mv) => print_kv("Move", mv),
        None => print_kv("Move", "none"),
    }
    print_kv("Score", format!("{:+}", decision.score));
    print_search_stats("", &decision.stats);

    let unpruned_nodes = if args.compare {
        let unpruned = engine
            .clone()
            .with_pruning(false)
            .choose(&board, player, engine_symbol)?;
        print_search_stats(" (no pruning)", &unpruned.stats);
        if unpruned.score != decision.score {
            bail!(
                "pruned score {} differs from unpruned score {}",
                decision.score,
                unpruned.score
            );
        }
        Some(unpruned.stats.nodes)
    } else {
        None
    };

    if let Some(path) = args.export {
        let report = SolveReport {
            board: board.encode(),
            engine: engine_symbol,
            score: decision.score,
            chosen: decision.chosen,
            nodes: decision.stats.nodes,
            cutoffs: decision.stats.cutoffs,
            unpruned_nodes,
            moves: values
                .into_iter()
                .map(|(mv, score)| MoveValue { mv, score })
                .collect(),
        };
        let file = File::create(&path)
            .with_context(|| format!("creating export file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(&Board::standard()), Symbol::X);
        assert_eq!(side_to_move(&Board::from_string("X../.../...").unwrap()), Symbol::O);
        assert_eq!(side_to_move(&Board::from_string("XO./.../...").unwrap()), Symbol::X);
    }
}
