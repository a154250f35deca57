//! Cell coordinates.
//!
//! Cells are indexed row-major over the 5-column x 6-row grid:
//! `row = index / 5`, `col = index % 5`. On screen, columns are lettered
//! `A`-`E` and rows numbered `1`-`6`, so index 0 is `A1` and index 29 is `E6`.
//!
//! ```
//! use hidden_rank::core::Cell;
//!
//! let cell: Cell = "C3".parse().unwrap();
//! assert_eq!(cell.index(), 12);
//! assert_eq!((cell.row(), cell.col()), (2, 2));
//! assert_eq!(cell.to_string(), "C3");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::config::{CELL_COUNT, COLUMNS, HOME_ROWS, ROWS};
use super::player::Player;
use crate::error::EngineError;

/// A validated cell index in `0..30`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(u8);

impl Cell {
    /// Validate a raw cell index.
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::CellOutOfRange(index))
        }
    }

    /// Cell at the given 0-based row and column, if it is on the board.
    #[must_use]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLUMNS).then(|| Self((row * COLUMNS + col) as u8))
    }

    /// Every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    /// Cells `player` may deploy into.
    pub fn home_area(player: Player) -> impl Iterator<Item = Cell> {
        Self::all().filter(move |cell| cell.is_home_of(player))
    }

    /// Raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / COLUMNS
    }

    /// 0-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % COLUMNS
    }

    /// Whether this cell lies in `player`'s home rows.
    #[must_use]
    pub const fn is_home_of(self, player: Player) -> bool {
        match player {
            Player::One => self.row() < HOME_ROWS,
            Player::Two => self.row() >= ROWS - HOME_ROWS,
        }
    }
}

impl TryFrom<usize> for Cell {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = char::from(b'A' + self.col() as u8);
        write!(f, "{}{}", column, self.row() + 1)
    }
}

impl FromStr for Cell {
    type Err = EngineError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCellLabel(label.to_string());

        let mut chars = label.chars();
        let column = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !('A'..='E').contains(&column) {
            return Err(invalid());
        }
        let row = match chars.as_str().as_bytes() {
            [digit @ b'1'..=b'6'] => usize::from(digit - b'1'),
            _ => return Err(invalid()),
        };

        Self::from_coords(row, column as usize - 'A' as usize).ok_or_else(invalid)
    }
}
