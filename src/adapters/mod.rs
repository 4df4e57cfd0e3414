//! Adapters implementing domain ports.
//!
//! Console I/O, scripted input for tests and demos, random play for
//! simulations, and observers that record or discard round events.

pub mod console;
pub mod random;
pub mod recording;
pub mod scripted;

pub use console::{ConsoleMoveSource, ConsoleObserver, prompt_line};
pub use random::RandomMoves;
pub use recording::{EventLog, NoopObserver, RoundEvent};
pub use scripted::ScriptedMoves;
