//! Board position types.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Construction asserts the range; an out-of-range coordinate is a
/// programmer error, not a recoverable condition.
///
/// # Examples
///
/// ```
/// use kudoku_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.column(), 4);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order: `(0, 0)`, `(1, 0)`, ...,
    /// `(8, 8)`.
    ///
    /// This is the deterministic scan order used by the solver when
    /// searching for the next empty cell.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// The nine positions of each row, indexed by row number.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// The nine positions of each column, indexed by column number.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self {
                    x: x as u8,
                    y: y as u8,
                };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The nine positions of each 3x3 box, indexed by box number
    /// (row-major, see [`box_index`](Self::box_index)).
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        while b < 9 {
            let origin_x = (b % 3) * 3;
            let origin_y = (b / 3) * 3;
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self {
                    x: (origin_x + i % 3) as u8,
                    y: (origin_y + i / 3) as u8,
                };
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9, "Column must be 0-8");
        assert!(y < 9, "Row must be 0-8");
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Returns the column (0-8). Alias of [`x`](Self::x).
    #[must_use]
    pub const fn column(&self) -> u8 {
        self.x
    }

    /// Returns the row (0-8). Alias of [`y`](Self::y).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    ///
    /// Boxes are numbered row-major: box 0 is the top-left 3x3 block,
    /// box 8 the bottom-right.
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_origin(&self) -> Self {
        Self {
            x: (self.x / 3) * 3,
            y: (self.y / 3) * 3,
        }
    }

    pub(crate) const fn cell_index(&self) -> usize {
        self.y as usize * 9 + self.x as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
