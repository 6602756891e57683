//! The game session.

use kudoku_core::{Digit, Grid, Position};
use kudoku_generator::GeneratedPuzzle;
use kudoku_solver::validator;

use crate::{
    boundary::{SolveOutcome, check_and_solve},
    cell_state::CellState,
    error::GameError,
};

/// A sudoku game session.
///
/// Tracks given (initial) cells and player input separately, keeps the
/// generated solution for the caller, and owns the solve-request flow:
/// validate, solve, and on success write the completed grid back and lock
/// the session against further edits.
///
/// # Example
///
/// ```
/// use kudoku_game::Game;
/// use kudoku_generator::{PuzzleGenerator, reference_solution};
///
/// let solution = reference_solution();
/// let mut generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(&solution, 2);
/// let game = Game::new(puzzle);
///
/// assert!(!game.is_locked());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Grid,
    locked: bool,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Cells filled in the puzzle's problem grid become given (read-only)
    /// cells; the rest start empty.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for (pos, cell) in problem.cells() {
            if let Some(digit) = cell {
                cells[usize::from(pos.row()) * 9 + usize::from(pos.column())] =
                    CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            locked: false,
        }
    }

    const fn cell_index(pos: Position) -> usize {
        pos.row() as usize * 9 + pos.column() as usize
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[Self::cell_index(pos)]
    }

    /// Returns the solution grid the puzzle was derived from.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns whether the session is locked (a solve request succeeded).
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn check_editable(&self, pos: Position) -> Result<(), GameError> {
        if self.locked {
            return Err(GameError::GridLocked);
        }
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        Ok(())
    }

    /// Enters a player digit at the given position.
    ///
    /// An existing player digit is replaced. No legality check happens
    /// here; conflicting input is surfaced later by the solve request.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells and
    /// [`GameError::GridLocked`] after a successful solve.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.check_editable(pos)?;
        self.cells[Self::cell_index(pos)] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at the given position, if any.
    ///
    /// Clearing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for given cells and
    /// [`GameError::GridLocked`] after a successful solve.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_editable(pos)?;
        self.cells[Self::cell_index(pos)] = CellState::Empty;
        Ok(())
    }

    /// Transcribes the session state (givens plus player input) into a
    /// [`Grid`].
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns whether the current state is a solved grid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        validator::is_solved(&self.to_grid())
    }

    /// Runs a solve request against the current state.
    ///
    /// The flow mirrors the engine boundary contract: validate first, then
    /// search. On [`SolveOutcome::Solved`] the completed digits are written
    /// back into the session as player fills and the session locks; on the
    /// other outcomes nothing changes and the player can keep editing and
    /// retry.
    pub fn request_solve(&mut self) -> SolveOutcome {
        let outcome = check_and_solve(&self.to_grid());
        if let SolveOutcome::Solved(grid) = &outcome {
            for (pos, cell) in grid.cells() {
                if !self.cell(pos).is_given() {
                    let digit = cell.expect("solved grid is complete");
                    self.cells[Self::cell_index(pos)] = CellState::Filled(digit);
                }
            }
            self.locked = true;
        }
        outcome
    }
}
