//! Legality validation and backtracking solving for kudoku grids.
//!
//! This crate contains the two rule-engine halves of the workspace:
//!
//! - [`validator`]: read-only legality checks (no duplicate digit in any
//!   row, column, or 3x3 box)
//! - [`solver`]: exhaustive backtracking search that completes a grid in
//!   place or proves it unsolvable
//!
//! The two are deliberately separate passes with separate verdicts. The
//! validator answers "is the current input legal?"; the solver assumes a
//! legal grid and answers "does a completion exist?". The game-session
//! layer composes them in that order.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::Grid;
//! use kudoku_solver::{solver, validator};
//!
//! let mut grid: Grid = format!("7{}", ".".repeat(80)).parse()?;
//!
//! assert!(validator::is_valid(&grid));
//! assert!(solver::solve(&mut grid));
//! assert!(validator::is_solved(&grid));
//! # Ok::<(), kudoku_core::ParseGridError>(())
//! ```

pub mod solver;
pub mod validator;
