//! Game sessions and the engine/presentation boundary for kudoku.
//!
//! This crate sits between the rule engine ([`kudoku_solver`]) and any
//! presentation layer. It owns the three-way solve-request contract:
//!
//! - [`SolveOutcome::Solved`] with the completed grid,
//! - [`SolveOutcome::Unsolvable`] for legal grids with no completion,
//! - [`SolveOutcome::InvalidInput`] for parse failures and rule conflicts.
//!
//! [`transcribe`] converts presentation-owned cell tokens into a grid,
//! [`check_and_solve`] runs the validator-then-solver flow, and [`Game`]
//! is a full session with read-only given cells, player input, and
//! post-solve locking. The engine never touches presentation state; the
//! presentation layer never touches grids except through these entry
//! points.

pub mod boundary;
pub mod cell_state;
pub mod error;
pub mod game;

pub use self::{
    boundary::{SolveOutcome, check_and_solve, solve_entries, transcribe},
    cell_state::CellState,
    error::{EntryError, GameError},
    game::Game,
};
