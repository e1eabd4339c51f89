//! Depth-first backtracking solver.
//!
//! The solver fills every empty cell of a board by exhaustive search: it
//! scans cells in row-major order, tries digits 1-9 ascending at the first
//! empty cell, and recurses on each legal placement. A dead end undoes the
//! last placement and moves on to the next digit. Search order is fixed, so
//! for boards with more than one completion the first solution under this
//! ordering is always the one returned.
//!
//! Before searching, every given cell is checked for consistency: a board
//! whose clues already repeat a digit within a row, column, or region has no
//! solution, and the search would not notice because it only decides empty
//! cells.

use sudocheck_core::{Board, Digit};

use crate::checker;

/// Error returned when a board has no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the board has no solution")]
pub struct SolveError;

/// Counters collected during a solve.
///
/// # Examples
///
/// ```
/// use sudocheck_core::Board;
/// use sudocheck_solver::solver;
///
/// let board: Board = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///     .parse()
///     .unwrap();
/// let (_, stats) = solver::solve_with_stats(&board).unwrap();
/// assert!(stats.placements() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    placements: usize,
    backtracks: usize,
}

impl SolverStats {
    /// Returns the number of tentative placements made during search.
    #[must_use]
    pub const fn placements(self) -> usize {
        self.placements
    }

    /// Returns the number of placements that were undone.
    #[must_use]
    pub const fn backtracks(self) -> usize {
        self.backtracks
    }
}

/// Solves the board, returning a fully-determined copy.
///
/// The caller's board is never mutated; the search runs on a working copy.
///
/// A board that is already complete and consistent is returned unchanged.
///
/// # Errors
///
/// Returns [`SolveError`] if the givens are mutually inconsistent or the
/// search exhausts every digit assignment without completing the board.
pub fn solve(board: &Board) -> Result<Board, SolveError> {
    solve_with_stats(board).map(|(solution, _)| solution)
}

/// Solves the board and reports search counters alongside the solution.
///
/// # Errors
///
/// Returns [`SolveError`] under the same conditions as [`solve`].
pub fn solve_with_stats(board: &Board) -> Result<(Board, SolverStats), SolveError> {
    // The search only decides empty cells, so contradictions among the
    // givens must be rejected up front. Each filled cell is re-checked with
    // itself excluded: a duplicated digit sees its twin and fails.
    for (coord, digit) in board.filled_cells() {
        if !checker::is_placement_valid(board, coord, digit) {
            return Err(SolveError);
        }
    }

    let mut work = *board;
    let mut stats = SolverStats::default();
    if search(&mut work, &mut stats) {
        Ok((work, stats))
    } else {
        Err(SolveError)
    }
}

fn search(board: &mut Board, stats: &mut SolverStats) -> bool {
    let Some(coord) = board.first_empty() else {
        // No empty cell remains: solved.
        return true;
    };
    for digit in Digit::ALL {
        if checker::is_placement_valid(board, coord, digit) {
            board.set(coord, digit);
            stats.placements += 1;
            if search(board, stats) {
                return true;
            }
            board.clear(coord);
            stats.backtracks += 1;
        }
    }
    false
}
