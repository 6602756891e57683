//! Error types for the game session and the transcription boundary.

use derive_more::{Display, Error};

/// Errors from game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given cell and cannot be modified.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The grid was locked by a successful solve; no further edits.
    #[display("the grid is locked after a successful solve")]
    GridLocked,
}

/// A transcription token that is neither empty nor an integer 1-9.
///
/// Raised at the presentation boundary, before the validator or solver
/// ever sees the grid. `row` and `column` are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid entry {token:?} at row {row}, column {column}")]
pub struct EntryError {
    /// Row of the offending entry (0-8).
    pub row: u8,
    /// Column of the offending entry (0-8).
    pub column: u8,
    /// The raw token as supplied by the presentation layer.
    pub token: String,
}
