//! Combat resolution.
//!
//! The attacker wins when its rank is at least the defender's; ties go to
//! the attacker. The single exception is the ambush: rank 1 attacking
//! rank 7 wins.

use crate::core::{Combat, GameConfig, PieceId, Rank};

/// Whether an attacker of rank `attacker` defeats a defender of rank `defender`.
///
/// ```
/// use hidden_rank::core::{GameConfig, Rank};
/// use hidden_rank::rules::attacker_wins;
///
/// let r = |v| Rank::new(v).unwrap();
/// let config = GameConfig::default();
/// assert!(attacker_wins(r(1), r(7), &config));
/// assert!(attacker_wins(r(4), r(4), &config));
/// assert!(!attacker_wins(r(4), r(6), &config));
/// ```
#[must_use]
pub fn attacker_wins(attacker: Rank, defender: Rank, config: &GameConfig) -> bool {
    let ambush = attacker == Rank::AMBUSHER && defender == Rank::MAX;
    (config.ambush && ambush) || attacker >= defender
}

/// Fight `attacker` against `defender`.
#[must_use]
pub fn resolve(attacker: PieceId, defender: PieceId, config: &GameConfig) -> Combat {
    Combat {
        attacker,
        defender,
        attacker_won: attacker_wins(attacker.rank, defender.rank, config),
    }
}
