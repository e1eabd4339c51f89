//! Sudoku digit representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A sudoku digit in the range 1-9.
///
/// This enum provides type-safe representation of sudoku digits, preventing
/// invalid values at compile time.
///
/// # Examples
///
/// ```
/// use sudocheck_core::Digit;
///
/// let digit = Digit::D7;
/// assert_eq!(digit.value(), 7);
///
/// // Parse from a single-character value string
/// let digit: Digit = "3".parse().unwrap();
/// assert_eq!(digit, Digit::D3);
///
/// // "0" and multi-character strings are rejected
/// assert!("0".parse::<Digit>().is_err());
/// assert!("12".parse::<Digit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    ///
    /// The solver relies on this ordering when trying candidates, so the
    /// first solution it finds is deterministic.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudocheck_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from an ASCII character `'1'..='9'`.
    ///
    /// Returns `None` for any other character, including `'0'` and `'.'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudocheck_core::Digit;
    ///
    /// assert_eq!(Digit::from_ascii('9'), Some(Digit::D9));
    /// assert_eq!(Digit::from_ascii('.'), None);
    /// assert_eq!(Digit::from_ascii('0'), None);
    /// ```
    #[must_use]
    pub fn from_ascii(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|digit| digit.to_ascii() == ch)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the ASCII character for this digit (`'1'..='9'`).
    ///
    /// This is the character used in the 81-character serialized puzzle form.
    #[must_use]
    pub const fn to_ascii(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

/// Error returned when a value string is not a single digit 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit value")]
pub struct ParseDigitError;

impl FromStr for Digit {
    type Err = ParseDigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_ascii(ch).ok_or(ParseDigitError),
            _ => Err(ParseDigitError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::from_ascii(digit.to_ascii()), Some(digit));
        }
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
        }
    }

    #[test]
    fn test_from_ascii_rejects_non_digits() {
        for ch in ['.', '0', 'a', 'A', ' ', '/'] {
            assert_eq!(Digit::from_ascii(ch), None);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1".parse::<Digit>(), Ok(Digit::D1));
        assert_eq!("9".parse::<Digit>(), Ok(Digit::D9));
        assert_eq!("0".parse::<Digit>(), Err(ParseDigitError));
        assert_eq!("10".parse::<Digit>(), Err(ParseDigitError));
        assert_eq!("".parse::<Digit>(), Err(ParseDigitError));
        assert_eq!("A".parse::<Digit>(), Err(ParseDigitError));
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::D4.to_string(), "4");
        assert_eq!(Digit::D4.to_ascii(), '4');
    }
}
