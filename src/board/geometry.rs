//! Adjacency on the grid.
//!
//! Pieces step one cell up, down, left or right. Diagonals are never
//! adjacent, and neither is a cell to itself.

use smallvec::SmallVec;

use crate::core::Cell;

/// Up to four orthogonal neighbours of a cell.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// True iff `a` and `b` are one orthogonal step apart.
///
/// ```
/// use hidden_rank::board::are_adjacent_orthogonal;
/// use hidden_rank::core::Cell;
///
/// let c = |i| Cell::new(i).unwrap();
/// assert!(are_adjacent_orthogonal(c(7), c(12)));  // down
/// assert!(!are_adjacent_orthogonal(c(7), c(13))); // diagonal
/// assert!(!are_adjacent_orthogonal(c(4), c(5)));  // row wrap
/// ```
#[must_use]
pub fn are_adjacent_orthogonal(a: Cell, b: Cell) -> bool {
    let rows = a.row().abs_diff(b.row());
    let cols = a.col().abs_diff(b.col());
    matches!((rows, cols), (1, 0) | (0, 1))
}

/// Orthogonal neighbours of `cell`, in up/down/left/right order.
#[must_use]
pub fn neighbors(cell: Cell) -> Neighbors {
    let (row, col) = (cell.row(), cell.col());
    let candidates = [
        row.checked_sub(1).map(|r| (r, col)),
        Some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        Some((row, col + 1)),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|(r, c)| Cell::from_coords(r, c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(index: usize) -> Cell {
        Cell::new(index).unwrap()
    }

    #[test]
    fn test_orthogonal_steps() {
        assert!(are_adjacent_orthogonal(c(12), c(7)));
        assert!(are_adjacent_orthogonal(c(12), c(17)));
        assert!(are_adjacent_orthogonal(c(12), c(11)));
        assert!(are_adjacent_orthogonal(c(12), c(13)));
    }

    #[test]
    fn test_not_adjacent() {
        assert!(!are_adjacent_orthogonal(c(12), c(12)));
        assert!(!are_adjacent_orthogonal(c(12), c(6)));
        assert!(!are_adjacent_orthogonal(c(12), c(18)));
        assert!(!are_adjacent_orthogonal(c(12), c(2)));
        assert!(!are_adjacent_orthogonal(c(12), c(14)));
        // End of one row is not next to the start of the following row
        assert!(!are_adjacent_orthogonal(c(9), c(10)));
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        assert_eq!(neighbors(c(0)).as_slice(), &[c(5), c(1)]);
        assert_eq!(neighbors(c(29)).as_slice(), &[c(24), c(28)]);
        assert_eq!(neighbors(c(12)).as_slice(), &[c(7), c(17), c(11), c(13)]);
    }

    #[test]
    fn test_neighbors_match_adjacency() {
        for a in Cell::all() {
            let around = neighbors(a);
            for b in Cell::all() {
                assert_eq!(around.contains(&b), are_adjacent_orthogonal(a, b), "{a} / {b}");
            }
        }
    }
}
