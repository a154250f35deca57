//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player. Players are numbered 1 and 2 at the
//! boundary (labels, collaborator input) and 0-based internally.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexable by `Player`, used for anything the
//! engine keeps per side (unplaced pools, home areas).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::EngineError;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Deploys into rows 1-2 and moves first.
    One,
    /// Deploys into rows 5-6.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Parse a collaborator-facing player number (1 or 2).
    ///
    /// ```
    /// use hidden_rank::core::Player;
    ///
    /// assert_eq!(Player::from_number(2).unwrap(), Player::Two);
    /// assert!(Player::from_number(3).is_err());
    /// ```
    pub fn from_number(number: u8) -> Result<Self, EngineError> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }

    /// The player number as shown to users (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based index for per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use hidden_rank::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u32> = PlayerMap::with_default();
/// placed[Player::Two] += 1;
/// assert_eq!(placed[Player::One], 0);
/// assert_eq!(placed[Player::Two], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap, initializing each slot with the given function.
    pub fn new(mut init: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [init(Player::One), init(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
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
