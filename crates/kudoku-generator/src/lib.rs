//! Puzzle derivation for the kudoku workspace.
//!
//! Puzzles are not generated from scratch: a fixed, known-good solved grid
//! ([`reference_solution`]) is the basis, and [`PuzzleGenerator`] blanks a
//! difficulty-dependent number of its cells to produce a playable problem.
//! Each [`GeneratedPuzzle`] carries the problem, the untouched solution,
//! and the seed that reproduces the blanking.
//!
//! # Examples
//!
//! ```
//! use kudoku_generator::{PuzzleGenerator, reference_solution};
//!
//! let solution = reference_solution();
//! let mut generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(&solution, 3);
//!
//! // At most difficulty * 10 cells are blanked
//! assert!(puzzle.problem.empty_count() <= 30);
//! ```

pub mod generator;
pub mod reference;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    reference::reference_solution,
};
