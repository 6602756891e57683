//! The 9x9 grid of optional digits.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9x9 sudoku grid.
///
/// Each of the 81 cells is either empty or holds a [`Digit`]. The grid is a
/// plain value type: cloning produces an independent copy with no shared
/// storage, which is what lets the solver work on a copy or roll back its
/// placements safely.
///
/// The grid itself performs no legality checks. [`set`](Self::set) happily
/// stores any digit anywhere; deciding whether the result respects sudoku
/// rules is the validator's job.
///
/// # Grid strings
///
/// Grids parse from and display as 81-character strings in row-major order.
/// Digits `1`-`9` are filled cells; `.`, `_`, and `0` are empty cells;
/// whitespace is ignored on input.
///
/// ```
/// use kudoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// The grid with all 81 cells empty.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a grid from a 9x9 array of numeric values in row-major order.
    ///
    /// `0` denotes an empty cell; `1`-`9` are filled cells.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.column())];
            if value != 0 {
                grid.set(pos, Some(Digit::from_value(value)));
            }
        }
        grid
    }

    /// Returns the cell value at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets the cell at the given position to a digit, or clears it with
    /// `None`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.cell_index()] = value;
    }

    /// Clears the cell at the given position.
    pub const fn clear(&mut self, pos: Position) {
        self.set(pos, None);
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is complete.
    ///
    /// This is the solver's deterministic cell-selection rule.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| self.get(*pos).is_none())
    }

    /// Iterates over all positions paired with their cell values,
    /// in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

/// An error produced when parsing a grid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The string contains a character that is not a digit, an empty-cell
    /// marker, or whitespace.
    InvalidCharacter(char),
    /// The string does not contain exactly 81 cells.
    WrongCellCount(usize),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid character in grid string: {c:?}"),
            Self::WrongCellCount(n) => {
                write!(f, "grid string has {n} cells, expected 81")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::from_value(c as u8 - b'0')),
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
