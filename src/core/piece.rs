//! Piece identity.
//!
//! Every player owns one piece of each rank, so `(owner, rank)` identifies a
//! piece instance for the lifetime of a game. A `PieceId` is never reused
//! within one game; `reset` starts a new one.

use serde::{Deserialize, Serialize};

use super::config::RANK_COUNT;
use super::player::Player;
use crate::error::EngineError;

/// Numeric strength of a piece, 0 through 7.
///
/// Rank 0 is the flag: it has no combat value and capturing it ends the
/// game. Rank 1 is the weakest combat rank, rank 7 the strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// The flag.
    pub const FLAG: Rank = Rank(0);

    /// The weakest combat rank, which ambushes the strongest.
    pub const AMBUSHER: Rank = Rank(1);

    /// The strongest rank.
    pub const MAX: Rank = Rank(RANK_COUNT as u8 - 1);

    /// Validate a raw rank.
    pub fn new(value: u8) -> Result<Self, EngineError> {
        if (value as usize) < RANK_COUNT {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidRank(value))
        }
    }

    /// Every rank, flag first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..RANK_COUNT as u8).map(Rank)
    }

    /// Raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this is the flag.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        self.0 == Self::FLAG.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A specific piece: its owner and rank.
///
/// ```
/// use hidden_rank::core::{PieceId, Player, Rank};
///
/// let flag = PieceId::new(Player::Two, Rank::FLAG);
/// assert!(flag.rank.is_flag());
/// assert_eq!(flag.to_string(), "Player 2 rank 0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId {
    /// Side the piece belongs to.
    pub owner: Player,
    /// Combat rank.
    pub rank: Rank,
}

impl PieceId {
    /// Create a piece reference.
    #[must_use]
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Self { owner, rank }
    }

    /// Build a piece reference from collaborator-facing numbers.
    pub fn from_raw(player: u8, rank: u8) -> Result<Self, EngineError> {
        Ok(Self::new(Player::from_number(player)?, Rank::new(rank)?))
    }

    /// The full set of pieces one player deploys.
    pub fn set_for(owner: Player) -> impl Iterator<Item = PieceId> {
        Rank::all().map(move |rank| PieceId::new(owner, rank))
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rank {}", self.owner, self.rank)
    }
}
