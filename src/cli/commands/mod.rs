//! Subcommands of the noughts binary

pub mod play;
pub mod simulate;
pub mod solve;
