//! Core types: players, bids, and game state.
//!
//! These are the fundamental building blocks; the rules layer composes
//! them into the round-resolution state machine.

pub mod bid;
pub mod player;
pub mod state;

pub use bid::{Bid, BidError};
pub use player::{Player, PlayerMap};
pub use state::{GameState, RoundRecord, BOARD_SIZE, STARTING_POINTS, START_POSITION};
