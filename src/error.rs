//! Error types.
//!
//! Game-rule violations are not errors: they come back as
//! [`RejectCode`](crate::core::RejectCode)s inside an `Outcome`. The types here
//! cover contract violations by the collaborator (structurally invalid
//! input) and the board's own bookkeeping failures.

use thiserror::Error;

use crate::core::{Cell, PieceId, RejectCode};

/// Structurally invalid input at the engine boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Cell index outside the 30-cell grid.
    #[error("cell index {0} is outside the board (0..{max})", max = crate::core::CELL_COUNT)]
    CellOutOfRange(usize),

    /// Cell label that is not a column letter A-E followed by a row 1-6.
    #[error("invalid cell label {0:?}")]
    InvalidCellLabel(String),

    /// Rank outside 0..=7.
    #[error("rank {0} is outside 0..={max}", max = crate::core::Rank::MAX.value())]
    InvalidRank(u8),

    /// Player number other than 1 or 2.
    #[error("player number {0} is not 1 or 2")]
    InvalidPlayer(u8),
}

/// Occupancy failures reported by the [`Board`](crate::board::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Target cell already holds a piece.
    #[error("{0} is already occupied")]
    OccupiedCell(Cell),

    /// Piece already has a location on the board.
    #[error("{0} is already on the board")]
    AlreadyPlaced(PieceId),
}

impl From<BoardError> for RejectCode {
    fn from(error: BoardError) -> Self {
        match error {
            BoardError::OccupiedCell(_) => RejectCode::OccupiedCell,
            BoardError::AlreadyPlaced(_) => RejectCode::AlreadyPlaced,
        }
    }
}
