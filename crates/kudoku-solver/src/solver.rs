//! Exhaustive backtracking search.
//!
//! The solver fills every empty cell of a grid with a digit consistent with
//! sudoku rules, or reports that no completion exists. The search is a
//! classic depth-first walk over partial assignments: scan for the first
//! empty cell in row-major order, try candidates 1-9 in ascending order,
//! recurse, and undo the placement when a branch fails. Both orders are
//! fixed, so the search is fully deterministic.
//!
//! Failure is an ordinary outcome, reported as `false`. Every placement
//! made during a failed branch is undone before returning, so on failure
//! the caller-visible grid is exactly the grid that was passed in.

use kudoku_core::{Digit, Grid, Position};

/// Returns whether placing `digit` at `pos` conflicts with no currently
/// filled cell in the same row, column, or 3x3 box.
///
/// The cell at `pos` is expected to be empty; the check compares against
/// every other cell of the three houses, so a digit already stored at `pos`
/// itself would also be reported as a conflict.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, Grid, Position};
/// use kudoku_solver::solver;
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(8, 0), Some(Digit::D4));
///
/// assert!(!solver::is_safe(&grid, Position::new(0, 0), Digit::D4));
/// assert!(solver::is_safe(&grid, Position::new(0, 0), Digit::D5));
/// ```
#[must_use]
pub fn is_safe(grid: &Grid, pos: Position, digit: Digit) -> bool {
    let row = &Position::ROWS[usize::from(pos.row())];
    let column = &Position::COLUMNS[usize::from(pos.column())];
    let boxed = &Position::BOXES[usize::from(pos.box_index())];
    row.iter()
        .chain(column)
        .chain(boxed)
        .all(|other| grid.get(*other) != Some(digit))
}

/// Attempts to fill every empty cell of the grid, mutating it in place.
///
/// On success the grid is fully filled and legal, and `true` is returned.
/// On failure the grid is restored to its pre-call state and `false` is
/// returned; an unsolvable puzzle is a normal outcome, not an error.
///
/// The solver trusts its input: a grid with no empty cells is reported as
/// solved without re-checking legality, because
/// [`validator::is_valid`](crate::validator::is_valid) is expected to have
/// run first. Callers that accept untrusted grids must validate before
/// solving (the game layer's `check_and_solve` does exactly that).
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::{solver, validator};
///
/// let mut grid = Grid::new();
/// assert!(solver::solve(&mut grid));
/// assert!(validator::is_solved(&grid));
/// ```
pub fn solve(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        // No empty cell remains: terminal success state.
        return true;
    };
    for digit in Digit::ALL {
        if is_safe(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if solve(grid) {
                return true;
            }
            grid.clear(pos);
        }
    }
    // All nine candidates failed; the previous frame tries its next one.
    false
}
