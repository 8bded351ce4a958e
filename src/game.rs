//! The turn loop: drives the round engine against the I/O collaborators.

use crate::core::{GameState, Player};
use crate::io::{BidSource, Renderer};
use crate::rules::{outcome, resolve_round, Outcome};

/// Play one game from the initial state to a terminal state.
///
/// Each iteration renders the current state, stops if both pools are
/// empty, collects both sealed bids, resolves the round, and stops if the
/// movement put the token on a board edge. The two stop checks sit at
/// different points on purpose: a round that drains the last points still
/// completes its movement, and the drained state is rendered once more
/// before the end screen. A player with an empty pool keeps participating
/// with forced zero bids as long as the opponent has points.
///
/// Returns the final state and its outcome.
pub fn play<S: BidSource, R: Renderer>(bids: &mut S, renderer: &mut R) -> (GameState, Outcome) {
    let mut state = GameState::new();

    loop {
        renderer.show_round(&state);

        if state.pools_exhausted() {
            break;
        }

        let bid_a = bids.collect_bid(Player::A, state.points(Player::A));
        let bid_b = bids.collect_bid(Player::B, state.points(Player::B));

        resolve_round(&mut state, bid_a, bid_b);

        if state.token_at_edge() {
            break;
        }
    }

    let result = outcome(&state);
    renderer.show_outcome(&state, result);
    (state, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bid, START_POSITION};

    /// Bid source that replays a fixed script of (a, b) amounts,
    /// clamping to the remaining pool and bidding 0 once exhausted.
    struct Scripted {
        rounds: Vec<(u32, u32)>,
        next: usize,
    }

    impl Scripted {
        fn new(rounds: &[(u32, u32)]) -> Self {
            Self {
                rounds: rounds.to_vec(),
                next: 0,
            }
        }
    }

    impl BidSource for Scripted {
        fn collect_bid(&mut self, player: Player, remaining_points: u32) -> Bid {
            if remaining_points == 0 {
                return Bid::zero();
            }
            let (a, b) = self.rounds.get(self.next).copied().unwrap_or((0, 0));
            let amount = match player {
                Player::A => a,
                Player::B => {
                    self.next += 1;
                    b
                }
            };
            Bid::new(amount.min(remaining_points), remaining_points).unwrap()
        }
    }

    /// Renderer that counts calls instead of printing.
    #[derive(Default)]
    struct Counting {
        rounds_shown: usize,
        outcomes_shown: usize,
    }

    impl Renderer for Counting {
        fn show_round(&mut self, _state: &GameState) {
            self.rounds_shown += 1;
        }

        fn show_outcome(&mut self, _state: &GameState, _outcome: Outcome) {
            self.outcomes_shown += 1;
        }
    }

    #[test]
    fn test_game_ends_at_edge() {
        // A out-bids B four times in a row
        let mut bids = Scripted::new(&[(2, 1), (2, 1), (2, 1), (2, 1)]);
        let mut renderer = Counting::default();

        let (state, result) = play(&mut bids, &mut renderer);

        assert_eq!(state.token_position(), 0);
        assert_eq!(result, Outcome::Winner(Player::A));
        // Loop stops right after the edge is reached, with points to spare
        assert_eq!(state.points(Player::A), 42);
        assert_eq!(state.history().len(), 4);
        // No render between the final movement and the end screen
        assert_eq!(renderer.rounds_shown, 4);
        assert_eq!(renderer.outcomes_shown, 1);
    }

    #[test]
    fn test_game_ends_when_both_pools_empty() {
        // Both players dump everything on round one
        let mut bids = Scripted::new(&[(50, 50)]);
        let mut renderer = Counting::default();

        let (state, result) = play(&mut bids, &mut renderer);

        assert!(state.pools_exhausted());
        assert_eq!(state.token_position(), START_POSITION);
        assert_eq!(result, Outcome::Draw);
        // The drained state is rendered once more before the end screen
        assert_eq!(renderer.rounds_shown, 2);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_broke_player_keeps_playing_with_zero_bids() {
        // A spends everything on round one, B bleeds it out
        let mut bids = Scripted::new(&[(50, 1), (0, 1), (0, 1), (0, 1), (0, 1), (0, 1)]);
        let mut renderer = Counting::default();

        let (state, result) = play(&mut bids, &mut renderer);

        // Round 1: A wins the token to 3. Rounds 2-5: B wins it to 7, then 8.
        assert_eq!(state.token_position(), 8);
        assert_eq!(result, Outcome::Winner(Player::B));
        assert_eq!(state.points(Player::A), 0);
        assert_eq!(state.points(Player::B), 44);
    }
}
