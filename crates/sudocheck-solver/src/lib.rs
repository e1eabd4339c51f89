//! Placement legality checks and a backtracking solver for sudoku boards.
//!
//! This crate builds on [`sudocheck_core`] in two layers:
//!
//! - [`checker`]: decides whether placing a digit at a coordinate conflicts
//!   with the row, column, or 3×3 region it belongs to.
//! - [`solver`]: exhaustive depth-first search that fills every empty cell,
//!   using the checker as its legality oracle.
//!
//! # Examples
//!
//! ```
//! use sudocheck_core::Board;
//! use sudocheck_solver::solver;
//!
//! let puzzle: Board = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!     .parse()
//!     .unwrap();
//!
//! let solution = solver::solve(&puzzle).unwrap();
//! assert!(solution.is_complete());
//! ```

pub mod checker;
pub mod solver;

pub use self::{
    checker::{Conflict, Conflicts},
    solver::{SolveError, SolverStats},
};
