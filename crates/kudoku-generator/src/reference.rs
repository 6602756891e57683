//! The fixed solved grid used as the basis for puzzles.

use kudoku_core::Grid;

const REFERENCE: [[u8; 9]; 9] = [
    [7, 8, 5, 4, 3, 9, 1, 2, 6],
    [6, 1, 2, 8, 7, 5, 3, 4, 9],
    [4, 9, 3, 6, 2, 1, 5, 7, 8],
    [8, 5, 7, 9, 4, 3, 2, 6, 1],
    [2, 6, 1, 7, 5, 8, 9, 3, 4],
    [9, 3, 4, 1, 6, 2, 7, 8, 5],
    [5, 7, 8, 3, 9, 4, 6, 1, 2],
    [1, 2, 6, 5, 8, 7, 4, 9, 3],
    [3, 4, 9, 2, 1, 6, 8, 5, 7],
];

/// Returns the canonical solved grid that every puzzle is derived from.
///
/// Generating fresh solved grids is out of scope for this workspace; the
/// generator blanks cells out of this one fixed solution instead.
///
/// # Examples
///
/// ```
/// use kudoku_generator::reference_solution;
///
/// let grid = reference_solution();
/// assert!(grid.is_complete());
/// ```
#[must_use]
pub fn reference_solution() -> Grid {
    Grid::from_values(REFERENCE)
}

#[cfg(test)]
mod tests {
    use kudoku_core::{Digit, Position};
    use kudoku_solver::validator;

    use super::*;

    #[test]
    fn test_reference_solution_is_solved() {
        let grid = reference_solution();
        assert!(grid.is_complete());
        assert!(validator::is_solved(&grid));
    }

    #[test]
    fn test_reference_solution_first_row() {
        let grid = reference_solution();
        let row0: Vec<_> = Position::ROWS[0]
            .iter()
            .map(|pos| grid.get(*pos))
            .collect();
        assert_eq!(row0[0], Some(Digit::D7));
        assert_eq!(row0[1], Some(Digit::D8));
        assert_eq!(row0[8], Some(Digit::D6));
    }
}
