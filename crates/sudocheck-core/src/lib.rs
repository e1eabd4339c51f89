//! Core data structures for the sudocheck puzzle engine.
//!
//! This crate provides the puzzle representation shared by the checker and
//! solver layers:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`coordinate`]: Validated board coordinates ("A1".."I9" labels)
//! - [`board`]: The 9×9 board and its 81-character serialized form
//! - [`digit_set`]: A compact set of digits 1-9
//!
//! # Examples
//!
//! ```
//! use sudocheck_core::{Board, Coordinate, Digit};
//!
//! let puzzle: Board = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!     .parse()
//!     .unwrap();
//!
//! let a1: Coordinate = "A1".parse().unwrap();
//! assert_eq!(puzzle.get(a1), Some(Digit::D1));
//!
//! // Serialization is the exact inverse of parsing.
//! assert_eq!(puzzle.to_string().len(), 81);
//! ```

pub mod board;
pub mod coordinate;
pub mod digit;
pub mod digit_set;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseBoardError},
    coordinate::{Coordinate, ParseCoordinateError},
    digit::{Digit, ParseDigitError},
    digit_set::DigitSet,
};
