//! Optimal tic-tac-toe opponent
//!
//! This crate provides:
//! - An immutable board model with row-major move enumeration
//! - Winning-line enumeration and win/draw detection
//! - Exhaustive minimax search with alpha-beta pruning
//! - A round orchestrator that alternates human and engine turns
//! - Console, scripted and random adapters plus the `noughts` CLI
//!
//! # Examples
//!
//! ```
//! use noughts::{search::Engine, tictactoe::{Board, Move, Symbol}};
//!
//! // O (the engine) completes the top row.
//! let board = Board::from_string("OO./XX./X..").unwrap();
//! let decision = Engine::standard().choose(&board, Symbol::X, Symbol::O).unwrap();
//! assert_eq!(decision.chosen, Some(Move::new(0, 2)));
//! assert_eq!(decision.score, 1);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use search::{Decision, Engine, Score, SearchResult, SearchStats, search};
pub use session::{Outcome, Round, RoundState, Scoreboard, Series};
