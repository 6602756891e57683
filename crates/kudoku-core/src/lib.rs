//! Core data structures for the kudoku sudoku engine.
//!
//! This crate provides the fundamental value types shared by the solver,
//! generator, and game-session crates:
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: a 9-bit set of digits, used for duplicate detection
//! - [`position`]: board coordinates and the row/column/box house tables
//! - [`grid`]: the 9x9 grid of optional digits, with grid-string parsing
//!
//! The grid is a plain value type with no hidden sharing: cloning it yields
//! an independent copy, and every engine operation takes it by value or by
//! explicit reference. There is no process-wide puzzle state.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
//! assert_eq!(grid.empty_count(), 80);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
