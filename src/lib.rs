//! # footsteps
//!
//! A two-player sealed-bid bidding game on a one-dimensional board.
//!
//! Each round both players secretly bid from their remaining point pool.
//! The higher bid pulls the shared token one cell toward the bidder; both
//! bids are spent regardless of who wins the round. The game ends when
//! the token reaches either end of the board or both players are out of
//! points, and the winner is the player whose side the token finished on.
//!
//! ## Architecture
//!
//! - **Pure engine**: round resolution, termination, and outcome live in
//!   [`rules`] as I/O-free state transitions over [`core::GameState`],
//!   so the game logic is testable without simulating console input.
//!
//! - **Boundary traits**: everything a player sees or types goes through
//!   [`io::BidSource`] and [`io::Renderer`]; the console implementations
//!   are thin wrappers with no decision logic.
//!
//! - **Validated bids**: a [`core::Bid`] can only be constructed within
//!   the bidder's remaining pool, so an over-pool bid never reaches the
//!   engine.
//!
//! ## Modules
//!
//! - `core`: players, bids, game state
//! - `rules`: the round engine
//! - `io`: boundary traits and console front end
//! - `game`: the turn loop wiring them together

pub mod core;
pub mod game;
pub mod io;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Bid, BidError, GameState, Player, PlayerMap, RoundRecord, BOARD_SIZE, STARTING_POINTS,
    START_POSITION,
};

pub use crate::rules::{is_terminal, outcome, resolve_round, terminal_outcome, Outcome};

pub use crate::io::{BidSource, ConsoleBidSource, ConsoleRenderer, Renderer};

pub use crate::game::play;
