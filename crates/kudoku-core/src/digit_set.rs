//! A set of sudoku digits, backed by a 16-bit integer.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! ```

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Bits 0-8 of the underlying 16-bit integer represent digits 1-9
/// respectively, providing cheap storage and constant-time membership
/// tests. The validator uses this to detect duplicate digits within a
/// house.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitSet};
///
/// let mut seen = DigitSet::new();
/// assert!(seen.insert(Digit::D7)); // newly inserted
/// assert!(!seen.insert(Digit::D7)); // already present
/// assert!(seen.contains(Digit::D7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let newly = self.bits & bit == 0;
        self.bits |= bit;
        newly
    }

    /// Removes a digit, returning `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Returns whether the set contains the digit.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the digits in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> {
        let bits = self.bits;
        Digit::ALL
            .into_iter()
            .filter(move |digit| bits & Self::bit(*digit) != 0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
