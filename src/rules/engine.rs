//! Rules engine trait.
//!
//! A rules engine owns its game state and answers three questions:
//! - What actions are legal for a player right now
//! - What happens when an action is applied
//! - Whether the game is over, and who won

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, Outcome, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who captured the opposing flag.
    pub winner: Player,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: every returned action must be accepted by `apply`
/// - `apply`: deterministic; a rejected action leaves the state untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &GameConfig;

    /// Actions `player` could issue now that would be accepted.
    ///
    /// Returns empty if the player can't act.
    fn legal_actions(&self, player: Player) -> Vec<Action>;

    /// Apply an action.
    fn apply(&mut self, action: Action) -> Outcome;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` would be accepted right now.
    fn is_legal(&self, action: &Action) -> bool {
        let players = match action.actor() {
            Some(player) => vec![player],
            None => Player::ALL.to_vec(),
        };
        players
            .into_iter()
            .any(|player| self.legal_actions(player).contains(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult { winner: Player::Two };
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
    }
}
