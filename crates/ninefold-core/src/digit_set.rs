//! A set of sudoku digits backed by a 9-bit mask.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitSet};
//!
//! let mut seen = DigitSet::new();
//! seen.insert(Digit::D2);
//! seen.insert(Digit::D7);
//!
//! assert_eq!(seen.len(), 2);
//! assert!(seen.contains(Digit::D7));
//! assert!(!seen.contains(Digit::D1));
//! ```

use std::fmt;

use crate::Digit;

/// A set of sudoku digits.
///
/// Bits 0-8 of the backing `u16` represent digits 1-9. All operations are
/// constant-time bit twiddling.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0x1ff);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn mask(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.0 |= Self::mask(digit);
        inserted
    }

    /// Removes a digit, returning `true` if it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.0 &= !Self::mask(digit);
        removed
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |&digit| self.contains(digit))
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
