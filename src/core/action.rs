//! Commands and their outcomes.
//!
//! An `Action` is one of the three state-changing commands expressed as
//! data. Every command produces an `Outcome`: either accepted, possibly
//! with a combat report and a winner, or rejected with a `RejectCode` and
//! no state change.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::PieceId;
use super::player::Player;

/// A game command.
///
/// ## Example
///
/// ```
/// use hidden_rank::core::{Action, Cell, PieceId};
///
/// let piece = PieceId::from_raw(1, 3).unwrap();
/// let place = Action::Place { piece, cell: Cell::new(4).unwrap() };
/// assert_eq!(place.actor(), Some(piece.owner));
/// assert_eq!(Action::Start.actor(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deploy an unplaced piece during setup.
    Place {
        /// Piece to deploy.
        piece: PieceId,
        /// Target home cell.
        cell: Cell,
    },
    /// Step a deployed piece during play.
    Move {
        /// Piece to move.
        piece: PieceId,
        /// Target cell.
        to: Cell,
    },
    /// End setup and begin play.
    Start,
}

impl Action {
    /// The player issuing this action, if it belongs to one.
    #[must_use]
    pub fn actor(&self) -> Option<Player> {
        match self {
            Action::Place { piece, .. } | Action::Move { piece, .. } => Some(piece.owner),
            Action::Start => None,
        }
    }
}

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectCode {
    /// The piece belongs to the player who is not on turn.
    WrongTurn,
    /// The piece has already been deployed.
    AlreadyPlaced,
    /// The target cell is outside the owner's home rows.
    OutOfHomeArea,
    /// The target cell already holds a piece.
    OccupiedCell,
    /// The target cell holds a piece of the same owner.
    FriendlyFire,
    /// The piece is not on the board or the target is not one orthogonal step away.
    IllegalGeometry,
    /// The defender outranks the attacker.
    CombatLost,
    /// The command is not allowed in the current phase.
    InvalidPhase,
    /// Play cannot start before every piece is deployed.
    IncompleteDeployment,
}

impl RejectCode {
    /// Short user-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RejectCode::WrongTurn => "it is not your turn",
            RejectCode::AlreadyPlaced => "that piece is already on the board",
            RejectCode::OutOfHomeArea => "pieces must be placed in your home rows",
            RejectCode::OccupiedCell => "that cell is already occupied",
            RejectCode::FriendlyFire => "you cannot move onto your own piece",
            RejectCode::IllegalGeometry => "pieces move one step up, down, left or right",
            RejectCode::CombatLost => "the defending piece is stronger",
            RejectCode::InvalidPhase => "that command is not allowed right now",
            RejectCode::IncompleteDeployment => "every piece must be placed before starting",
        }
    }
}

impl std::fmt::Display for RejectCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Report of a fight between a moving piece and an opposing occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combat {
    /// The moving piece.
    pub attacker: PieceId,
    /// The piece on the target cell.
    pub defender: PieceId,
    /// Whether the attacker prevailed.
    pub attacker_won: bool,
}

/// Result of a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Set when the command was refused.
    pub reason: Option<RejectCode>,
    /// Set when the command involved combat, won or lost.
    pub combat: Option<Combat>,
    /// Set when the command ended the game.
    pub winner: Option<Player>,
}

impl Outcome {
    /// A plain accepted outcome.
    #[must_use]
    pub fn accepted() -> Self {
        Self::default()
    }

    /// A rejection.
    #[must_use]
    pub fn rejected(reason: RejectCode) -> Self {
        Self {
            reason: Some(reason),
            ..Self::default()
        }
    }

    /// Attach a combat report.
    #[must_use]
    pub fn with_combat(mut self, combat: Combat) -> Self {
        self.combat = Some(combat);
        self
    }

    /// Attach a winner.
    #[must_use]
    pub fn with_winner(mut self, winner: Player) -> Self {
        self.winner = Some(winner);
        self
    }

    /// Whether the command took effect.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.reason.is_none()
    }

    /// Whether the command ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}
