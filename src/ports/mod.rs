//! Ports (trait boundaries) for external dependencies.
//!
//! The round orchestrator only talks to the outside world through these
//! traits: where human moves come from, and who gets told about round
//! events. Adapters in [`crate::adapters`] implement them for the console,
//! for scripted tests and for random play.

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::Observer;
