//! Transport-agnostic operations of the sudocheck service.
//!
//! This crate exposes the two logical operations a front end maps onto:
//!
//! - [`solve::solve`]: takes a serialized puzzle and returns the solved
//!   serialization, or a caller-visible error.
//! - [`check::check`]: takes a puzzle, a coordinate label, and a candidate
//!   value, and reports whether the placement is legal along with the
//!   violated constraint categories when it is not.
//!
//! Requests and responses are plain serde-serializable data, so any HTTP or
//! CLI layer can frame them without touching the core. All caller-visible
//! error messages live in [`error::ApiError`], and validation follows a
//! fixed order: missing field, puzzle length, puzzle characters, coordinate,
//! value, and finally the logical check.
//!
//! # Examples
//!
//! ```
//! use sudocheck_api::solve::{self, SolveRequest};
//!
//! let request = SolveRequest {
//!     puzzle: Some(
//!         "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!             .to_owned(),
//!     ),
//! };
//! let solution = solve::solve(&request).unwrap();
//! assert_eq!(solution.len(), 81);
//! ```

pub mod check;
pub mod error;
pub mod solve;

pub use self::{
    check::{CheckOutcome, CheckRequest, CheckResponse, ConflictKind},
    error::ApiError,
    solve::{SolveRequest, SolveResponse},
};
