//! Puzzle derivation by blanking cells of a solved grid.

use kudoku_core::{Grid, Position};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// A puzzle derived from a solved grid.
///
/// The problem grid is handed to the player; the solution it was blanked
/// from is retained so the caller can compare against it or redraw from it
/// later. The seed reproduces the exact blanking via
/// [`PuzzleGenerator::generate_with_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with some cells blanked.
    pub problem: Grid,
    /// The solved grid the problem was derived from.
    pub solution: Grid,
    /// The seed that produced this exact blanking.
    pub seed: u64,
}

/// Derives playable puzzles from a solved grid by blanking random cells.
///
/// The difficulty level controls how many blanking picks are made:
/// `difficulty * 10` uniformly random cells are cleared. A pick may land on
/// an already-empty cell, which is an intentional no-op, so the effective
/// number of blanks is at most the requested count. A difficulty of `0`
/// clears nothing and hands back the solved grid as the problem.
///
/// # Examples
///
/// ```
/// use kudoku_generator::{PuzzleGenerator, reference_solution};
///
/// let solution = reference_solution();
/// let mut generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(&solution, 2);
///
/// assert!(puzzle.problem.empty_count() <= 20);
/// assert_eq!(puzzle.solution, solution);
/// ```
#[derive(Debug)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Creates a generator with an explicit seed, for reproducible puzzles.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Derives a puzzle from `solution` at the given difficulty.
    ///
    /// Each generated puzzle carries the sub-seed that produced it, so
    /// [`generate_with_seed`](Self::generate_with_seed) can rebuild it
    /// exactly.
    pub fn generate(&mut self, solution: &Grid, difficulty: u32) -> GeneratedPuzzle {
        let seed = self.rng.random();
        Self::generate_with_seed(solution, difficulty, seed)
    }

    /// Derives the puzzle determined by an explicit seed.
    #[must_use]
    pub fn generate_with_seed(solution: &Grid, difficulty: u32, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut problem = solution.clone();
        let picks = difficulty as usize * 10;
        for _ in 0..picks {
            let x = rng.random_range(0..9u8);
            let y = rng.random_range(0..9u8);
            // Re-picking an already-empty cell is a deliberate no-op;
            // the effective blank count is <= the requested count.
            problem.clear(Position::new(x, y));
        }
        GeneratedPuzzle {
            problem,
            solution: solution.clone(),
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use kudoku_solver::{solver, validator};
    use proptest::prelude::*;

    use super::*;
    use crate::reference::reference_solution;

    #[test]
    fn test_zero_difficulty_keeps_solved_grid() {
        let solution = reference_solution();
        let mut generator = PuzzleGenerator::new();
        let puzzle = generator.generate(&solution, 0);
        assert_eq!(puzzle.problem, solution);
    }

    #[test]
    fn test_blanking_preserves_structure() {
        let solution = reference_solution();
        let mut generator = PuzzleGenerator::from_seed(42);
        for difficulty in 1..=8 {
            let puzzle = generator.generate(&solution, difficulty);

            // The exact blank count is seed-dependent; only the upper
            // bound is guaranteed.
            assert!(puzzle.problem.empty_count() <= difficulty as usize * 10);

            // Every surviving cell came from the solution, so blanking can
            // never introduce a conflict.
            for (pos, cell) in puzzle.problem.cells() {
                if cell.is_some() {
                    assert_eq!(cell, puzzle.solution.get(pos));
                }
            }
            assert!(validator::is_valid(&puzzle.problem));

            // The caller keeps the untouched solution.
            assert_eq!(puzzle.solution, solution);
        }
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        let solution = reference_solution();
        let mut generator = PuzzleGenerator::from_seed(7);
        let puzzle = generator.generate(&solution, 3);

        let mut work = puzzle.problem.clone();
        assert!(solver::solve(&mut work));
        assert!(validator::is_solved(&work));
    }

    #[test]
    fn test_seed_reproduces_puzzle() {
        let solution = reference_solution();
        let mut generator = PuzzleGenerator::from_seed(123);
        let puzzle = generator.generate(&solution, 4);

        let replay = PuzzleGenerator::generate_with_seed(&solution, 4, puzzle.seed);
        assert_eq!(replay, puzzle);
    }

    #[test]
    fn test_same_generator_seed_yields_same_stream() {
        let solution = reference_solution();
        let mut a = PuzzleGenerator::from_seed(99);
        let mut b = PuzzleGenerator::from_seed(99);
        for difficulty in [1, 3, 5] {
            assert_eq!(
                a.generate(&solution, difficulty),
                b.generate(&solution, difficulty)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_blanked_grids_stay_valid(seed: u64, difficulty in 0u32..=8) {
            let solution = reference_solution();
            let puzzle = PuzzleGenerator::generate_with_seed(&solution, difficulty, seed);

            prop_assert!(puzzle.problem.empty_count() <= difficulty as usize * 10);
            prop_assert!(validator::is_valid(&puzzle.problem));
            for (pos, cell) in puzzle.problem.cells() {
                if cell.is_some() {
                    prop_assert_eq!(cell, puzzle.solution.get(pos));
                }
            }
        }
    }
}
