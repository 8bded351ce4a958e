//! The round engine: round resolution, termination, and outcome.
//!
//! Pure state transitions, no I/O. The turn loop in [`crate::game`] drives
//! these against the boundary collaborators.

use std::cmp::Ordering;

use crate::core::{Bid, GameState, Player, START_POSITION};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The token finished on this player's half of the board.
    Winner(Player),
    /// The token finished at dead center.
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins!"),
            Outcome::Draw => write!(f, "The game is a draw (half victory)."),
        }
    }
}

/// Resolve one round: spend both bids, then apply the movement rule.
///
/// Applied in order:
/// 1. Both bids are deducted from their pools. Both are spent regardless
///    of who wins the round.
/// 2. The strictly higher bidder pulls the token one cell toward their
///    side; a tie (including 0/0) leaves the token in place.
///
/// The round is recorded in the state's history. Bids are valid for their
/// pools by construction, so there are no error paths.
pub fn resolve_round(state: &mut GameState, bid_a: Bid, bid_b: Bid) {
    state.spend(Player::A, bid_a.amount());
    state.spend(Player::B, bid_b.amount());

    if let Some(winner) = Bid::higher_bidder(bid_a, bid_b) {
        state.shift_token(winner);
    }

    state.record_round(bid_a.amount(), bid_b.amount());
}

/// Check whether the game is over.
///
/// True iff both pools are empty or the token sits at either board end.
/// The turn loop evaluates the pool condition before collecting bids and
/// the edge condition immediately after movement; the two checks are not
/// interchangeable. In particular, a round that drains the last points
/// still completes its movement before the game stops.
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    state.pools_exhausted() || state.token_at_edge()
}

/// Determine the outcome from the final token position.
///
/// Total over the valid position range: the token left of center means
/// Player A wins, right of center means Player B wins, dead center is a
/// draw. Only meaningful once a terminal state is reached.
#[must_use]
pub fn outcome(state: &GameState) -> Outcome {
    match state.token_position().cmp(&START_POSITION) {
        Ordering::Less => Outcome::Winner(Player::A),
        Ordering::Greater => Outcome::Winner(Player::B),
        Ordering::Equal => Outcome::Draw,
    }
}

/// Check if the game is over, returning the outcome if so.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn terminal_outcome(state: &GameState) -> Option<Outcome> {
    is_terminal(state).then(|| outcome(state))
}
