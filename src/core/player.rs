//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Footsteps is strictly two-player. Player A sits at the low end of the
//! board (cell 0), Player B at the high end (cell `BOARD_SIZE - 1`); the
//! token moves toward whichever player out-bids the other.
//!
//! ## PlayerMap
//!
//! Per-player data storage with O(1) access, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Low end of the board (cell 0).
    A,
    /// High end of the board (cell `BOARD_SIZE - 1`).
    B,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Iterate over both players, A first.
    ///
    /// ```
    /// use footsteps::core::Player;
    ///
    /// let players: Vec<_> = Player::both().collect();
    /// assert_eq!(players, vec![Player::A, Player::B]);
    /// ```
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::A, Player::B].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// One entry per player. Use `PlayerMap::new()` to create with a factory
/// function, or `PlayerMap::with_value()` to initialize both entries to the
/// same value.
///
/// ## Example
///
/// ```
/// use footsteps::core::{Player, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(50);
///
/// assert_eq!(points[Player::A], 50);
///
/// points[Player::B] = 35;
/// assert_eq!(points[Player::B], 35);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    a: T,
    b: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `Player` for each entry.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            a: factory(Player::A),
            b: factory(Player::B),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            a: value.clone(),
            b: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }

    /// Iterate over (Player, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::A, &self.a), (Player::B, &self.b)].into_iter()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
