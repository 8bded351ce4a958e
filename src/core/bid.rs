//! Validated bids.
//!
//! A `Bid` can only be constructed against the bidder's remaining point
//! pool, so a bid that exceeds the pool is unrepresentable past this
//! boundary. The round engine relies on this: it spends bids without
//! re-checking them.

use thiserror::Error;

use super::player::Player;

/// Error returned when a bid fails validation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BidError {
    /// The bid exceeds the bidder's remaining points.
    #[error("bid {amount} exceeds remaining points {remaining}")]
    ExceedsPool { amount: u32, remaining: u32 },
}

/// A sealed bid: a non-negative point amount no greater than the bidder's
/// remaining pool at the time it was made.
///
/// Both players' bids are spent every round regardless of who wins the
/// round, so the amount here is always a real cost.
///
/// ## Example
///
/// ```
/// use footsteps::core::Bid;
///
/// let bid = Bid::new(10, 50).unwrap();
/// assert_eq!(bid.amount(), 10);
///
/// assert!(Bid::new(51, 50).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bid(u32);

impl Bid {
    /// Validate an amount against the bidder's remaining points.
    pub fn new(amount: u32, remaining: u32) -> Result<Self, BidError> {
        if amount > remaining {
            return Err(BidError::ExceedsPool { amount, remaining });
        }
        Ok(Self(amount))
    }

    /// The forced bid for a player whose pool is empty.
    ///
    /// A broke player still participates in every round (as long as the
    /// opponent has points left) but is never consulted; this is the bid
    /// submitted on their behalf.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The bid amount in points.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Compare two bids and name the strictly higher bidder, if any.
    ///
    /// Returns `None` on a tie (including the degenerate 0/0 round).
    #[must_use]
    pub fn higher_bidder(bid_a: Bid, bid_b: Bid) -> Option<Player> {
        use std::cmp::Ordering;
        match bid_a.cmp(&bid_b) {
            Ordering::Greater => Some(Player::A),
            Ordering::Less => Some(Player::B),
            Ordering::Equal => None,
        }
    }
}
