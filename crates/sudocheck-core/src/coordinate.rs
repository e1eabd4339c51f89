//! Validated board coordinates.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A validated cell coordinate on the 9×9 board.
///
/// Rows and columns are stored as zero-based indices (0-8). The external
/// label form is a row letter `A`-`I` followed by a column number `1`-`9`,
/// so `"A1"` is the top-left cell and `"I9"` the bottom-right.
///
/// # Examples
///
/// ```
/// use sudocheck_core::Coordinate;
///
/// let coord: Coordinate = "C7".parse().unwrap();
/// assert_eq!(coord.row(), 2);
/// assert_eq!(coord.col(), 6);
/// assert_eq!(coord.index(), 2 * 9 + 6);
/// assert_eq!(coord.to_string(), "C7");
///
/// // Labels outside the board are rejected
/// assert!("A13".parse::<Coordinate>().is_err());
/// assert!("J1".parse::<Coordinate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Array containing all 81 coordinates in row-major order.
    ///
    /// The solver scans cells in this order, so it also defines which empty
    /// cell becomes the next decision point during search.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a coordinate from zero-based row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a coordinate from a linear index in the range 0-80.
    ///
    /// The index is row-major: `index = row * 9 + col`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self { row, col }
    }

    /// Returns the zero-based row index (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index (0-8, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 region containing this cell (0-8).
    ///
    /// Regions are numbered left to right, top to bottom: region 0 covers
    /// rows A-C and columns 1-3, region 8 covers rows G-I and columns 7-9.
    #[must_use]
    pub const fn region(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.row) as char;
        write!(f, "{}{}", letter, self.col + 1)
    }
}

/// Error returned when a coordinate label is malformed.
///
/// A label must be exactly two characters: a row letter `A`-`I` (case
/// insensitive) and a column digit `1`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid coordinate label")]
pub struct ParseCoordinateError;

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Valid labels are pure ASCII, so a byte view suffices: any
        // multi-byte character fails the range checks below.
        let &[letter, digit] = s.as_bytes() else {
            return Err(ParseCoordinateError);
        };
        let row = match letter.to_ascii_uppercase() {
            letter @ b'A'..=b'I' => letter - b'A',
            _ => return Err(ParseCoordinateError),
        };
        let col = match digit {
            b'1'..=b'9' => digit - b'1',
            _ => return Err(ParseCoordinateError),
        };
        Ok(Self { row, col })
    }
}
