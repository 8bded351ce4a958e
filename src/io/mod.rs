//! Boundary traits between the engine and its I/O collaborators.
//!
//! The round engine is pure; everything a player sees or types goes
//! through these two traits. The console implementations live in
//! [`console`]; tests drive the game with scripted implementations.

pub mod console;

use crate::core::{Bid, GameState, Player};
use crate::rules::Outcome;

/// Supplies one sealed bid per player per round.
///
/// ## Contract
///
/// - The returned bid must be valid for `remaining_points` (the [`Bid`]
///   type enforces this at construction).
/// - When `remaining_points == 0` the source must return [`Bid::zero`]
///   immediately, without consulting the player.
/// - A call blocks until a valid bid exists; recovering from malformed
///   input is entirely the source's concern and never reaches the engine.
///
/// Within a round, neither player's bid may be informed by the other's
/// value: the loop collects both before resolving anything.
pub trait BidSource {
    fn collect_bid(&mut self, player: Player, remaining_points: u32) -> Bid;
}

/// Presents game state to the players.
pub trait Renderer {
    /// Called at the top of every loop iteration, before bids are
    /// collected (and once more before the end screen).
    fn show_round(&mut self, state: &GameState);

    /// Called once, after a terminal state is reached.
    fn show_outcome(&mut self, state: &GameState, outcome: Outcome);
}

pub use console::{ConsoleBidSource, ConsoleRenderer};
