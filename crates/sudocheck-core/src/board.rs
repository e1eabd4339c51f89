//! The 9×9 board and its 81-character serialized form.
//!
//! A puzzle travels as a single 81-character string, read row-major from the
//! top-left cell: digits `1`-`9` are givens and `.` marks an empty cell.
//! [`Board`] implements [`FromStr`] and [`Display`] so parsing and
//! serialization are exact inverses of each other.
//!
//! Parsing enforces only the serialized format (length and character set).
//! A parsed board may still be logically inconsistent; placement legality is
//! the checker's concern, not the codec's.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Coordinate, Digit};

/// A 9×9 sudoku board.
///
/// Each of the 81 cells holds either a digit or nothing. Cells are addressed
/// by [`Coordinate`] and stored in row-major order.
///
/// # Examples
///
/// ```
/// use sudocheck_core::{Board, Coordinate, Digit};
///
/// let mut board = Board::empty();
/// let e5 = Coordinate::new(4, 4);
///
/// board.set(e5, Digit::D7);
/// assert_eq!(board.get(e5), Some(Digit::D7));
///
/// board.clear(e5);
/// assert_eq!(board.get(e5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates a board with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the coordinate, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, coord: Coordinate) -> Option<Digit> {
        self.cells[coord.index()]
    }

    /// Places a digit at the coordinate, overwriting any previous value.
    pub const fn set(&mut self, coord: Coordinate, digit: Digit) {
        self.cells[coord.index()] = Some(digit);
    }

    /// Empties the cell at the coordinate.
    pub const fn clear(&mut self, coord: Coordinate) {
        self.cells[coord.index()] = None;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is complete.
    ///
    /// This defines the solver's decision order during search.
    #[must_use]
    pub fn first_empty(&self) -> Option<Coordinate> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Coordinate::from_index)
    }

    /// Returns an iterator over all filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (Coordinate, Digit)> {
        Coordinate::ALL
            .into_iter()
            .filter_map(|coord| self.get(coord).map(|digit| (coord, digit)))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{}", digit.to_ascii())?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a serialized puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input is not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    InvalidLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The input contains a character other than `1`-`9` or `.`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based position of the character in the input.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::InvalidLength { len });
        }
        let mut cells = [None; 81];
        for (index, ch) in s.chars().enumerate() {
            cells[index] = match ch {
                '.' => None,
                _ => Some(Digit::from_ascii(ch).ok_or(ParseBoardError::InvalidCharacter { ch, index })?),
            };
        }
        Ok(Self { cells })
    }
}
