//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions and running simulated matches.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
