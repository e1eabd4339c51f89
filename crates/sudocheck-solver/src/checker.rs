//! Placement legality checks.
//!
//! A placement is a candidate `(coordinate, digit)` pair evaluated against a
//! board without mutating it. It is legal when the digit does not already
//! occupy another cell in the same row, column, or 3×3 region.
//!
//! The cell being evaluated is always excluded from its own conflict set:
//! asking whether a digit is valid at a cell that already holds that exact
//! digit reports no conflict. This matters when a caller re-checks a filled
//! cell rather than proposing a move into an empty one.

use sudocheck_core::{Board, Coordinate, Digit, DigitSet};

/// One of the three constraint categories a placement can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Conflict {
    /// The digit already occupies another cell in the same row.
    #[display("row")]
    Row,
    /// The digit already occupies another cell in the same column.
    #[display("column")]
    Column,
    /// The digit already occupies another cell in the same 3×3 region.
    #[display("region")]
    Region,
}

impl Conflict {
    /// All conflict categories, in the order they are reported.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Region];
}

/// The set of constraint categories violated by a placement.
///
/// # Examples
///
/// ```
/// use sudocheck_core::{Board, Coordinate, Digit};
/// use sudocheck_solver::checker::{self, Conflict};
///
/// let mut board = Board::empty();
/// board.set(Coordinate::new(0, 5), Digit::D4);
///
/// let conflicts = checker::placement_conflicts(&board, Coordinate::new(0, 0), Digit::D4);
/// assert!(conflicts.contains(Conflict::Row));
/// assert!(!conflicts.contains(Conflict::Column));
/// assert!(!conflicts.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conflicts {
    row: bool,
    column: bool,
    region: bool,
}

impl Conflicts {
    /// The empty conflict set (a legal placement).
    pub const NONE: Self = Self {
        row: false,
        column: false,
        region: false,
    };

    /// Returns `true` if the placement violates no constraint.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.row && !self.column && !self.region
    }

    /// Returns `true` if the given category is violated.
    #[must_use]
    pub const fn contains(self, conflict: Conflict) -> bool {
        match conflict {
            Conflict::Row => self.row,
            Conflict::Column => self.column,
            Conflict::Region => self.region,
        }
    }

    /// Returns the violated categories in row, column, region order.
    pub fn iter(self) -> impl Iterator<Item = Conflict> {
        Conflict::ALL
            .into_iter()
            .filter(move |conflict| self.contains(*conflict))
    }
}

/// Returns the digits occupying the row of `coord`, excluding `coord` itself.
#[must_use]
pub fn digits_in_row(board: &Board, coord: Coordinate) -> DigitSet {
    (0..9)
        .map(|col| Coordinate::new(coord.row(), col))
        .filter(|other| *other != coord)
        .filter_map(|other| board.get(other))
        .collect()
}

/// Returns the digits occupying the column of `coord`, excluding `coord`
/// itself.
#[must_use]
pub fn digits_in_column(board: &Board, coord: Coordinate) -> DigitSet {
    (0..9)
        .map(|row| Coordinate::new(row, coord.col()))
        .filter(|other| *other != coord)
        .filter_map(|other| board.get(other))
        .collect()
}

/// Returns the digits occupying the 3×3 region of `coord`, excluding `coord`
/// itself.
#[must_use]
pub fn digits_in_region(board: &Board, coord: Coordinate) -> DigitSet {
    let top = coord.row() / 3 * 3;
    let left = coord.col() / 3 * 3;
    (top..top + 3)
        .flat_map(move |row| (left..left + 3).map(move |col| Coordinate::new(row, col)))
        .filter(|other| *other != coord)
        .filter_map(|other| board.get(other))
        .collect()
}

/// Returns `true` if the digit already occupies another cell in the row of
/// `coord`.
#[must_use]
pub fn conflicts_in_row(board: &Board, coord: Coordinate, digit: Digit) -> bool {
    digits_in_row(board, coord).contains(digit)
}

/// Returns `true` if the digit already occupies another cell in the column of
/// `coord`.
#[must_use]
pub fn conflicts_in_column(board: &Board, coord: Coordinate, digit: Digit) -> bool {
    digits_in_column(board, coord).contains(digit)
}

/// Returns `true` if the digit already occupies another cell in the 3×3
/// region of `coord`.
#[must_use]
pub fn conflicts_in_region(board: &Board, coord: Coordinate, digit: Digit) -> bool {
    digits_in_region(board, coord).contains(digit)
}

/// Evaluates a placement against all three constraint categories.
#[must_use]
pub fn placement_conflicts(board: &Board, coord: Coordinate, digit: Digit) -> Conflicts {
    Conflicts {
        row: conflicts_in_row(board, coord, digit),
        column: conflicts_in_column(board, coord, digit),
        region: conflicts_in_region(board, coord, digit),
    }
}

/// Returns `true` if the placement violates no constraint.
#[must_use]
pub fn is_placement_valid(board: &Board, coord: Coordinate, digit: Digit) -> bool {
    placement_conflicts(board, coord, digit).is_empty()
}
