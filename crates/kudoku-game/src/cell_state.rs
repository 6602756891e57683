//! Per-cell session state.

use kudoku_core::Digit;

/// The state of a single cell within a game session.
///
/// Given cells come from the generated problem and are read-only; filled
/// cells are player input and can be changed or cleared. Presentation
/// layers render the two differently (givens locked/shaded, player cells
/// plain).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A pre-filled cell from the puzzle problem; cannot be modified.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }

    /// Returns whether this is a given (read-only) cell.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns whether this cell is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
