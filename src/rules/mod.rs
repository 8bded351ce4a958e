//! Round-resolution rules: state transitions, termination, outcome.

pub mod engine;

pub use engine::{is_terminal, outcome, resolve_round, terminal_outcome, Outcome};
