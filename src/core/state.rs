//! Game state: board constants, round history, and the state record.
//!
//! ## GameState
//!
//! The sole entity of the game:
//! - Token position on the board
//! - Both players' point pools
//! - Round counter and history of resolved rounds
//!
//! All mutation goes through the mechanical operations here (`spend`,
//! `shift_token`, `record_round`), which preserve the invariants:
//!
//! - `0 <= token_position <= BOARD_SIZE - 1` at all times
//! - point pools are non-negative and monotonically non-increasing
//!
//! The rules layer composes these into the round-resolution rule; this
//! module knows nothing about winners or termination.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// Number of board cells. Odd, so a unique center exists.
pub const BOARD_SIZE: usize = 9;

/// The token's starting cell: the board center.
pub const START_POSITION: usize = BOARD_SIZE / 2;

/// Points each player starts with.
pub const STARTING_POINTS: u32 = 50;

/// A resolved round, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,

    /// Both players' bid amounts.
    pub bids: PlayerMap<u32>,

    /// Token position after the round's movement.
    pub token_after: usize,
}

/// Complete game state.
///
/// Created once at game start, mutated once per round, and read-only for
/// final reporting once a terminal condition is reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Token cell, in `[0, BOARD_SIZE - 1]`.
    token_position: usize,

    /// Remaining points per player.
    points: PlayerMap<u32>,

    /// Round number (starts at 1, advances when a round is recorded).
    round_number: u32,

    /// History of resolved rounds.
    /// Persistent vector, so cloning a state mid-game is cheap.
    history: Vector<RoundRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the initial state: token at the center, both pools full.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token_position: START_POSITION,
            points: PlayerMap::with_value(STARTING_POINTS),
            round_number: 1,
            history: Vector::new(),
        }
    }

    /// Current token cell.
    #[must_use]
    pub fn token_position(&self) -> usize {
        self.token_position
    }

    /// A player's remaining points.
    #[must_use]
    pub fn points(&self, player: Player) -> u32 {
        self.points[player]
    }

    /// Current round number (starts at 1).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// History of resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// True when both pools are empty.
    #[must_use]
    pub fn pools_exhausted(&self) -> bool {
        Player::both().all(|p| self.points[p] == 0)
    }

    /// True when the token sits at either end of the board.
    #[must_use]
    pub fn token_at_edge(&self) -> bool {
        self.token_position == 0 || self.token_position == BOARD_SIZE - 1
    }

    // === Mechanical operations (composed by the rules layer) ===

    /// Deduct a bid from a player's pool.
    ///
    /// ## Panics
    ///
    /// Panics if `amount` exceeds the pool. A bid reaching this point
    /// without fitting the pool is a contract violation by the bid
    /// collector, not a game event.
    pub fn spend(&mut self, player: Player, amount: u32) {
        assert!(
            amount <= self.points[player],
            "{player} cannot spend {amount} with {} points remaining",
            self.points[player]
        );
        self.points[player] -= amount;
    }

    /// Move the token one cell toward a player's side.
    ///
    /// Saturates at the board edges, so the position invariant holds even
    /// if called on a state that is already terminal.
    pub fn shift_token(&mut self, toward: Player) {
        self.token_position = match toward {
            Player::A => self.token_position.saturating_sub(1),
            Player::B => (self.token_position + 1).min(BOARD_SIZE - 1),
        };
    }

    /// Record a resolved round and advance the round counter.
    pub fn record_round(&mut self, bid_a: u32, bid_b: u32) {
        self.history.push_back(RoundRecord {
            round: self.round_number,
            bids: PlayerMap::new(|p| match p {
                Player::A => bid_a,
                Player::B => bid_b,
            }),
            token_after: self.token_position,
        });
        self.round_number += 1;
    }
}
