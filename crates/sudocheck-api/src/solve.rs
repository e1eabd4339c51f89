//! The solve operation.

use serde::{Deserialize, Serialize};
use sudocheck_core::Board;
use sudocheck_solver::solver;

use crate::error::{ApiError, require_field};

/// Request for the solve operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The 81-character serialized puzzle. Absent or empty means the field
    /// is missing.
    pub puzzle: Option<String>,
}

/// Serializable envelope for a solve outcome.
///
/// Success renders as `{"solution": "..."}`, failure as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solution {
        /// The solved 81-character serialization.
        solution: String,
    },
    /// The request was rejected.
    Error {
        /// Caller-visible error message.
        error: String,
    },
}

impl From<Result<String, ApiError>> for SolveResponse {
    fn from(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(solution) => Self::Solution { solution },
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Solves a serialized puzzle.
///
/// Validation happens in order: the puzzle field must be present, then the
/// serialized form must be well-formed (length before characters), and only
/// then is the board handed to the solver.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`], [`ApiError::InvalidLength`],
/// [`ApiError::InvalidCharacters`], or [`ApiError::Unsolvable`].
pub fn solve(request: &SolveRequest) -> Result<String, ApiError> {
    let puzzle = require_field(request.puzzle.as_ref())?;
    let board: Board = puzzle.parse()?;
    let solution = solver::solve(&board)?;
    log::debug!("solved puzzle with {} givens", board.filled_cells().count());
    Ok(solution.to_string())
}

/// Runs [`solve`] and wraps the outcome in a [`SolveResponse`].
#[must_use]
pub fn solve_response(request: &SolveRequest) -> SolveResponse {
    solve(request).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    const SOLUTION: &str =
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

    fn request(puzzle: &str) -> SolveRequest {
        SolveRequest {
            puzzle: Some(puzzle.to_owned()),
        }
    }

    #[test]
    fn test_solves_valid_puzzle() {
        assert_eq!(solve(&request(PUZZLE)), Ok(SOLUTION.to_owned()));
    }

    #[test]
    fn test_missing_puzzle() {
        assert_eq!(
            solve(&SolveRequest { puzzle: None }),
            Err(ApiError::MissingField)
        );
        assert_eq!(solve(&request("")), Err(ApiError::MissingField));
    }

    #[test]
    fn test_invalid_characters() {
        let bad = PUZZLE.replacen('2', "G", 1);
        assert_eq!(solve(&request(&bad)), Err(ApiError::InvalidCharacters));
    }

    #[test]
    fn test_invalid_length() {
        // Both too short and containing a bad character: length is reported
        let short = "1.5..2.8G..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16.....";
        assert_eq!(solve(&request(short)), Err(ApiError::InvalidLength));
    }

    #[test]
    fn test_unsolvable_puzzle() {
        let contradictory =
            "1.5..2.84..63.12.7.2..1111111..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
        assert_eq!(solve(&request(contradictory)), Err(ApiError::Unsolvable));
    }

    #[test]
    fn test_response_serialization() {
        let ok = solve_response(&request(PUZZLE));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({ "solution": SOLUTION })
        );

        let err = solve_response(&SolveRequest { puzzle: None });
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({ "error": "Required field missing" })
        );
    }

    #[test]
    fn test_request_deserialization() {
        let request: SolveRequest = serde_json::from_str(r#"{"puzzle": null}"#).unwrap();
        assert_eq!(request.puzzle, None);
        let request: SolveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.puzzle, None);
    }
}
