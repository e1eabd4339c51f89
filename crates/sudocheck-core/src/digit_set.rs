//! A compact set of digits 1-9.

use crate::Digit;

/// A set of sudoku digits, stored as a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. The checker and solver use
/// this to collect the digits already present in a row, column, or region
/// without allocating.
///
/// # Examples
///
/// ```
/// use sudocheck_core::{Digit, DigitSet};
///
/// let mut seen = DigitSet::new();
/// seen.insert(Digit::D2);
/// seen.insert(Digit::D8);
///
/// assert!(seen.contains(Digit::D2));
/// assert!(!seen.contains(Digit::D5));
/// assert_eq!(seen.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
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

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |digit| self.contains(*digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Digit::D1));
        assert!(set.insert(Digit::D9));
        assert!(!set.insert(Digit::D1));
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = DigitSet::from_iter([Digit::D3, Digit::D4]);
        assert!(set.remove(Digit::D3));
        assert!(!set.remove(Digit::D3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
    }
}
