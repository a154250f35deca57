//! Phase and turn bookkeeping.
//!
//! ## Phase
//!
//! `Setup` allows placement only, `Playing` allows movement only,
//! `Finished` allows nothing but a reset.
//!
//! ## PublicState
//!
//! Observable progression shared by both players: phase, whose turn it is,
//! and the winner once the game is over.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Stage of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players deploy pieces into their home rows.
    #[default]
    Setup,
    /// Pieces move and fight.
    Playing,
    /// A flag was captured.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Phase, turn and result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicState {
    /// Current phase.
    pub phase: Phase,

    /// Player whose command is expected next.
    pub current_player: Player,

    /// Winner, set exactly when `phase` is `Finished`.
    pub winner: Option<Player>,

    /// Accepted placements and moves so far.
    pub turn_number: u32,
}

impl Default for PublicState {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicState {
    /// Fresh game: setup phase, player 1 to act.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Setup,
            current_player: Player::One,
            winner: None,
            turn_number: 0,
        }
    }

    /// Hand the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
    }

    /// Record the winner and end the game.
    pub fn finish(&mut self, winner: Player) {
        self.phase = Phase::Finished;
        self.winner = Some(winner);
    }

    /// Whether `player` is on turn.
    #[must_use]
    pub fn is_turn_of(&self, player: Player) -> bool {
        self.current_player == player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_state_new() {
        let state = PublicState::new();

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.current_player, Player::One);
        assert_eq!(state.winner, None);
        assert_eq!(state.turn_number, 0);
        assert_eq!(state, PublicState::default());
    }

    #[test]
    fn test_turn_advance() {
        let mut state = PublicState::new();

        state.advance_turn();
        assert!(state.is_turn_of(Player::Two));
        assert_eq!(state.turn_number, 1);

        state.advance_turn();
        assert!(state.is_turn_of(Player::One));
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_finish() {
        let mut state = PublicState::new();
        state.phase = Phase::Playing;

        state.finish(Player::Two);

        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.winner, Some(Player::Two));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Setup.to_string(), "setup");
        assert_eq!(Phase::Finished.to_string(), "finished");
    }
}
