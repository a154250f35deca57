//! Board occupancy.
//!
//! The `Board` tracks which cell holds which piece and the reverse mapping.
//! It knows nothing about turns, phases or combat: the engine checks the
//! rules first and then tells the board what to do.

use std::hash::BuildHasherDefault;

use im::{HashMap, OrdMap};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, PieceId};
use crate::error::{BoardError, EngineError};

/// Persistent map keyed with the Fx hasher.
type FxImHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Sparse cell -> piece mapping with reverse lookup.
///
/// ## Usage
///
/// ```
/// use hidden_rank::board::Board;
/// use hidden_rank::core::{Cell, PieceId};
///
/// let mut board = Board::new();
/// let scout = PieceId::from_raw(1, 3).unwrap();
/// let here = Cell::new(4).unwrap();
///
/// board.place(scout, here).unwrap();
/// assert_eq!(board.cell_at(here), Some(scout));
/// assert_eq!(board.location_of(scout), Some(here));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    /// Occupants: cell -> piece
    cells: OrdMap<Cell, PieceId>,

    /// Reverse index: piece -> cell
    locations: FxImHashMap<PieceId, Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a cell.
    #[must_use]
    pub fn cell_at(&self, cell: Cell) -> Option<PieceId> {
        self.cells.get(&cell).copied()
    }

    /// Occupant of a raw cell index.
    pub fn get(&self, index: usize) -> Result<Option<PieceId>, EngineError> {
        Ok(self.cell_at(Cell::new(index)?))
    }

    /// Where a piece currently stands, if anywhere.
    #[must_use]
    pub fn location_of(&self, piece: PieceId) -> Option<Cell> {
        self.locations.get(&piece).copied()
    }

    /// Put a piece that is not yet on the board into an empty cell.
    pub fn place(&mut self, piece: PieceId, cell: Cell) -> Result<(), BoardError> {
        if self.locations.contains_key(&piece) {
            return Err(BoardError::AlreadyPlaced(piece));
        }
        if self.cells.contains_key(&cell) {
            return Err(BoardError::OccupiedCell(cell));
        }

        self.cells.insert(cell, piece);
        self.locations.insert(piece, cell);
        Ok(())
    }

    /// Clear a cell.
    ///
    /// Returns the piece that was there, if any.
    pub fn remove(&mut self, cell: Cell) -> Option<PieceId> {
        let piece = self.cells.remove(&cell)?;
        self.locations.remove(&piece);
        Some(piece)
    }

    /// Relocate the occupant of `from` to `to`.
    ///
    /// Whatever stood on `to` loses its location. Returns the moved piece,
    /// or `None` (and changes nothing) if `from` was empty.
    pub fn move_occupant(&mut self, from: Cell, to: Cell) -> Option<PieceId> {
        let piece = self.cell_at(from)?;
        if from == to {
            return Some(piece);
        }

        self.cells.remove(&from);
        if let Some(overwritten) = self.cells.insert(to, piece) {
            self.locations.remove(&overwritten);
        }
        self.locations.insert(piece, to);
        Some(piece)
    }

    /// Occupied cells in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        self.cells.iter().map(|(&cell, &piece)| (cell, piece))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Immutable view of the current occupancy.
    ///
    /// O(1): the snapshot shares structure with the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.cells.clone(),
        }
    }
}

/// Read-only copy of the board for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: OrdMap<Cell, PieceId>,
}

impl BoardSnapshot {
    /// Occupant of a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<PieceId> {
        self.cells.get(&cell).copied()
    }

    /// Occupied cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        self.cells.iter().map(|(&cell, &piece)| (cell, piece))
    }

    /// Every cell in index order, empty ones as `None`.
    pub fn rows(&self) -> impl Iterator<Item = (Cell, Option<PieceId>)> + '_ {
        Cell::all().map(|cell| (cell, self.get(cell)))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
