//! The 5 x 6 grid: occupancy and adjacency.
//!
//! No rules live here. The board answers "who is where" and "which cells
//! touch", and applies placements, removals and relocations it is told to.

mod geometry;
mod grid;

pub use geometry::{are_adjacent_orthogonal, neighbors, Neighbors};
pub use grid::{Board, BoardSnapshot};
