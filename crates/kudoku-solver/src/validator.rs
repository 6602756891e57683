//! Grid legality checks.
//!
//! A grid is *valid* when no row, column, or 3x3 box contains the same
//! filled digit twice. Validity is independent of completeness: a grid with
//! empty cells can be valid, and an empty cell never contributes to a
//! duplicate check. Digit range (1-9) needs no checking here; the
//! [`Digit`](kudoku_core::Digit) type cannot represent anything else.

use kudoku_core::{DigitSet, Grid, Position};

/// Returns whether a house (a row, column, or box) contains no duplicate
/// filled digit.
fn house_has_no_duplicates(grid: &Grid, house: &[Position; 9]) -> bool {
    let mut seen = DigitSet::new();
    for pos in house {
        if let Some(digit) = grid.get(*pos)
            && !seen.insert(digit)
        {
            return false;
        }
    }
    true
}

/// Returns whether the grid is consistent with sudoku legality.
///
/// All three constraint families are checked independently; a duplicate in
/// any single row, column, or box makes the whole grid invalid. The grid is
/// only read, never mutated.
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::validator;
///
/// let valid: Grid = format!("12{}", ".".repeat(79)).parse().unwrap();
/// assert!(validator::is_valid(&valid));
///
/// let dup_in_row: Grid = format!("11{}", ".".repeat(79)).parse().unwrap();
/// assert!(!validator::is_valid(&dup_in_row));
/// ```
#[must_use]
pub fn is_valid(grid: &Grid) -> bool {
    Position::ROWS
        .iter()
        .chain(Position::COLUMNS.iter())
        .chain(Position::BOXES.iter())
        .all(|house| house_has_no_duplicates(grid, house))
}

/// Returns whether the grid is solved: every cell filled and every row,
/// column, and box a permutation of 1-9.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    grid.is_complete() && is_valid(grid)
}

#[cfg(test)]
mod tests {
    use kudoku_core::{Digit, Grid, Position};

    use super::*;

    const SOLVED: &str =
        "785439126612875349493621578857943261261758934934162785578394612126587493349216857";

    fn solved_grid() -> Grid {
        SOLVED.parse().expect("valid grid string")
    }

    #[test]
    fn test_empty_grid_is_valid() {
        assert!(is_valid(&Grid::EMPTY));
        assert!(!is_solved(&Grid::EMPTY));
    }

    #[test]
    fn test_solved_grid_is_valid_and_solved() {
        let grid = solved_grid();
        assert!(is_valid(&grid));
        assert!(is_solved(&grid));
    }

    #[test]
    fn test_rejects_duplicate_in_row() {
        // 5 appears twice in row 0, all else legal
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(6, 0), Some(Digit::D5));
        assert!(!is_valid(&grid));
    }

    #[test]
    fn test_rejects_duplicate_in_column() {
        // 9 appears twice in column 3
        let mut grid = Grid::new();
        grid.set(Position::new(3, 0), Some(Digit::D9));
        grid.set(Position::new(3, 5), Some(Digit::D9));
        assert!(!is_valid(&grid));
    }

    #[test]
    fn test_rejects_duplicate_in_box() {
        // 1 appears twice within the top-left box, at cells that share
        // neither a row nor a column, so only the box check can catch it
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(1, 1), Some(Digit::D1));
        assert!(!is_valid(&grid));
    }

    #[test]
    fn test_same_digit_in_unrelated_houses_is_valid() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(4, 4), Some(Digit::D5));
        grid.set(Position::new(8, 8), Some(Digit::D5));
        assert!(is_valid(&grid));
    }

    #[test]
    fn test_incomplete_but_valid_is_not_solved() {
        let mut grid = solved_grid();
        grid.clear(Position::new(0, 0));
        assert!(is_valid(&grid));
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let grid = solved_grid();
        let before = grid.clone();
        let _ = is_valid(&grid);
        let _ = is_solved(&grid);
        assert_eq!(grid, before);
    }
}
