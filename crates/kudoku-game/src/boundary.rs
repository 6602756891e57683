//! The engine side of the engine/presentation contract.
//!
//! The presentation layer owns widgets and text; the engine owns grids.
//! [`transcribe`] is the one crossing point from text to model: it copies
//! cell tokens into a [`Grid`] without altering any value, rejecting
//! anything that is not empty or a digit 1-9. [`check_and_solve`] then
//! runs the validator gate followed by the solver, and [`solve_entries`]
//! chains the two so a parse failure short-circuits straight to
//! [`SolveOutcome::InvalidInput`] without ever invoking the solver.

use derive_more::IsVariant;
use kudoku_core::{Digit, Grid, Position};
use kudoku_solver::{solver, validator};

use crate::error::EntryError;

/// The outcome of a solve request, as reported to the presentation layer.
///
/// Parse failures and logical conflicts are deliberately not distinguished:
/// both surface as [`InvalidInput`](Self::InvalidInput). A legal grid with
/// no completion is the separate [`Unsolvable`](Self::Unsolvable) outcome.
/// Every outcome is recoverable by further edits and a repeated request.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum SolveOutcome {
    /// The grid was legal and has been completed.
    Solved(Grid),
    /// The grid was legal but admits no completion.
    Unsolvable,
    /// The input failed transcription or the legality check.
    InvalidInput,
}

/// Transcribes a 9x9 array of cell tokens into a [`Grid`].
///
/// Tokens are indexed `entries[row][column]`. A token that is empty after
/// trimming becomes an empty cell; `"1"`-`"9"` become filled cells; any
/// other token is an error naming the offending cell. Transcription only
/// copies values from the tokens into the grid, it never changes them.
///
/// # Errors
///
/// Returns an [`EntryError`] for the first token (in row-major order) that
/// is neither empty nor an integer 1-9.
///
/// # Examples
///
/// ```
/// use kudoku_game::transcribe;
///
/// let mut entries = [[""; 9]; 9];
/// entries[0][0] = "7";
/// entries[4][4] = " 5 ";
///
/// let grid = transcribe(&entries).unwrap();
/// assert_eq!(grid.empty_count(), 79);
///
/// entries[8][8] = "seven";
/// assert!(transcribe(&entries).is_err());
/// ```
pub fn transcribe<S>(entries: &[[S; 9]; 9]) -> Result<Grid, EntryError>
where
    S: AsRef<str>,
{
    let mut grid = Grid::new();
    for pos in Position::ALL {
        let (row, column) = (pos.row(), pos.column());
        let token = entries[usize::from(row)][usize::from(column)].as_ref();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        let digit = trimmed
            .parse::<u8>()
            .ok()
            .and_then(Digit::new)
            .ok_or_else(|| EntryError {
                row,
                column,
                token: token.to_owned(),
            })?;
        grid.set(pos, Some(digit));
    }
    Ok(grid)
}

/// Validates a grid and, if legal, attempts to complete it.
///
/// The input grid is never mutated; the solver runs on a working copy. An
/// illegal grid yields [`SolveOutcome::InvalidInput`] and the solver is
/// never invoked, which is what keeps the solver's trust in its input
/// sound.
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_game::{SolveOutcome, check_and_solve};
///
/// let grid: Grid = format!("7{}", ".".repeat(80)).parse()?;
/// assert!(check_and_solve(&grid).is_solved());
///
/// let illegal: Grid = format!("77{}", ".".repeat(79)).parse()?;
/// assert_eq!(check_and_solve(&illegal), SolveOutcome::InvalidInput);
/// # Ok::<(), kudoku_core::ParseGridError>(())
/// ```
#[must_use]
pub fn check_and_solve(grid: &Grid) -> SolveOutcome {
    if !validator::is_valid(grid) {
        return SolveOutcome::InvalidInput;
    }
    let mut work = grid.clone();
    if solver::solve(&mut work) {
        SolveOutcome::Solved(work)
    } else {
        SolveOutcome::Unsolvable
    }
}

/// Transcribes cell tokens and solves the resulting grid.
///
/// A transcription failure maps to [`SolveOutcome::InvalidInput`] without
/// running the validator or the solver.
#[must_use]
pub fn solve_entries<S>(entries: &[[S; 9]; 9]) -> SolveOutcome
where
    S: AsRef<str>,
{
    match transcribe(entries) {
        Ok(grid) => check_and_solve(&grid),
        Err(_) => SolveOutcome::InvalidInput,
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::Digit;

    use super::*;

    const SOLVED: &str =
        "785439126612875349493621578857943261261758934934162785578394612126587493349216857";

    fn solved_grid() -> Grid {
        SOLVED.parse().expect("valid grid string")
    }

    #[test]
    fn test_transcribe_basic() {
        let mut entries = [[""; 9]; 9];
        entries[0][0] = "7";
        entries[2][5] = "3";
        entries[8][8] = "  9 ";

        let grid = transcribe(&entries).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D7));
        assert_eq!(grid.get(Position::new(5, 2)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.empty_count(), 78);
    }

    #[test]
    fn test_transcribe_rejects_bad_tokens() {
        for bad in ["x", "0", "10", "1.5", "-3", "five"] {
            let mut entries = [[""; 9]; 9];
            entries[3][4] = bad;
            let err = transcribe(&entries).unwrap_err();
            assert_eq!(err.row, 3);
            assert_eq!(err.column, 4);
            assert_eq!(err.token, bad);
        }
    }

    #[test]
    fn test_check_and_solve_solved_outcome() {
        let mut grid = solved_grid();
        grid.clear(Position::new(0, 0));
        let before = grid.clone();

        let outcome = check_and_solve(&grid);
        assert_eq!(outcome, SolveOutcome::Solved(solved_grid()));

        // The caller's grid is untouched
        assert_eq!(grid, before);
    }

    #[test]
    fn test_check_and_solve_invalid_input() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(6, 0), Some(Digit::D5));
        assert_eq!(check_and_solve(&grid), SolveOutcome::InvalidInput);
    }

    #[test]
    fn test_check_and_solve_unsolvable() {
        let grid: Grid = "
            .23456789
            1........
            .........
            .........
            .........
            .........
            .........
            .........
            .........
        "
        .parse()
        .expect("valid grid string");
        assert_eq!(check_and_solve(&grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_solve_entries_short_circuits_on_parse_error() {
        // The rest of the board is an illegal double-5 row; the parse
        // failure must win without the solver (or validator) running.
        let mut entries = [[""; 9]; 9];
        entries[0][0] = "5";
        entries[0][6] = "5";
        entries[4][4] = "banana";
        assert_eq!(solve_entries(&entries), SolveOutcome::InvalidInput);
    }

    #[test]
    fn test_solve_entries_happy_path() {
        let mut entries: [[String; 9]; 9] =
            std::array::from_fn(|_| std::array::from_fn(|_| String::new()));
        let solution = solved_grid();
        for pos in Position::ALL {
            // Leave one row for the solver to fill back in
            if pos.row() == 4 {
                continue;
            }
            let digit = solution.get(pos).expect("solved grid is complete");
            entries[usize::from(pos.row())][usize::from(pos.column())] = digit.to_string();
        }
        assert_eq!(solve_entries(&entries), SolveOutcome::Solved(solution));
    }
}
