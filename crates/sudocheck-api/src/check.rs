//! The check operation.

use serde::{Deserialize, Serialize};
use sudocheck_core::{Board, Coordinate, Digit};
use sudocheck_solver::{Conflict, checker};

use crate::error::{ApiError, require_field};

/// Request for the check operation.
///
/// All three fields are required; an absent or empty field is reported as
/// missing before anything else is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The 81-character serialized puzzle.
    pub puzzle: Option<String>,
    /// The cell label, row letter `A`-`I` followed by column number `1`-`9`.
    pub coordinate: Option<String>,
    /// The candidate digit as a one-character string `1`-`9`.
    pub value: Option<String>,
}

/// A constraint category reported in a check response.
///
/// Serializes as `"row"`, `"column"`, or `"region"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// The digit already occupies another cell in the same row.
    Row,
    /// The digit already occupies another cell in the same column.
    Column,
    /// The digit already occupies another cell in the same 3×3 region.
    Region,
}

impl From<Conflict> for ConflictKind {
    fn from(conflict: Conflict) -> Self {
        match conflict {
            Conflict::Row => Self::Row,
            Conflict::Column => Self::Column,
            Conflict::Region => Self::Region,
        }
    }
}

/// Outcome of a successful check.
///
/// When the placement is valid the conflict list is empty and omitted from
/// the serialized form; when invalid it names the violated categories in
/// row, column, region order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the placement is legal.
    pub valid: bool,
    /// Violated constraint categories, empty when valid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflict: Vec<ConflictKind>,
}

/// Serializable envelope for a check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement was evaluated.
    Outcome(CheckOutcome),
    /// The request was rejected.
    Error {
        /// Caller-visible error message.
        error: String,
    },
}

impl From<Result<CheckOutcome, ApiError>> for CheckResponse {
    fn from(result: Result<CheckOutcome, ApiError>) -> Self {
        match result {
            Ok(outcome) => Self::Outcome(outcome),
            Err(err) => Self::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Checks whether a single placement is legal against a puzzle.
///
/// Validation happens in order: all fields present, puzzle well-formed
/// (length before characters), coordinate label valid, value a digit 1-9,
/// and finally the placement itself. A candidate equal to the digit already
/// in the target cell is valid; the cell is never counted as its own
/// conflict.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`], [`ApiError::InvalidLength`],
/// [`ApiError::InvalidCharacters`], [`ApiError::InvalidCoordinate`], or
/// [`ApiError::InvalidValue`].
pub fn check(request: &CheckRequest) -> Result<CheckOutcome, ApiError> {
    let puzzle = require_field(request.puzzle.as_ref())?;
    let coordinate = require_field(request.coordinate.as_ref())?;
    let value = require_field(request.value.as_ref())?;

    let board: Board = puzzle.parse()?;
    let coord: Coordinate = coordinate.parse()?;
    let digit: Digit = value.parse()?;

    let conflicts = checker::placement_conflicts(&board, coord, digit);
    log::debug!("checked {digit} at {coord}: valid={}", conflicts.is_empty());
    Ok(CheckOutcome {
        valid: conflicts.is_empty(),
        conflict: conflicts.iter().map(ConflictKind::from).collect(),
    })
}

/// Runs [`check`] and wraps the outcome in a [`CheckResponse`].
#[must_use]
pub fn check_response(request: &CheckRequest) -> CheckResponse {
    check(request).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    fn request(puzzle: &str, coordinate: &str, value: &str) -> CheckRequest {
        CheckRequest {
            puzzle: Some(puzzle.to_owned()),
            coordinate: Some(coordinate.to_owned()),
            value: Some(value.to_owned()),
        }
    }

    #[test]
    fn test_valid_placement_into_empty_cell() {
        let outcome = check(&request(PUZZLE, "A2", "3")).unwrap();
        assert!(outcome.valid);
        assert!(outcome.conflict.is_empty());
    }

    #[test]
    fn test_own_cell_digit_is_valid() {
        // A1 already holds a 1
        let outcome = check(&request(PUZZLE, "A1", "1")).unwrap();
        assert!(outcome.valid);
    }

    #[test]
    fn test_single_conflict() {
        // Column 1 has an 8 at E1; row B and the top-left region have none
        let outcome = check(&request(PUZZLE, "B1", "8")).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.conflict, vec![ConflictKind::Column]);
    }

    #[test]
    fn test_all_conflict_categories() {
        // 2 appears in row A (A6), column 1 (I1), and the top-left region (C2)
        let outcome = check(&request(PUZZLE, "A1", "2")).unwrap();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.conflict,
            vec![ConflictKind::Row, ConflictKind::Column, ConflictKind::Region]
        );
    }

    #[test]
    fn test_multiple_conflicts_in_reporting_order() {
        // 1 appears in row A (A1) and in the top-left region
        let outcome = check(&request(PUZZLE, "A2", "1")).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.conflict, vec![ConflictKind::Row, ConflictKind::Region]);
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request(PUZZLE, "A1", "1");
        req.value = None;
        assert_eq!(check(&req), Err(ApiError::MissingField));

        let mut req = request(PUZZLE, "A1", "1");
        req.value = Some(String::new());
        assert_eq!(check(&req), Err(ApiError::MissingField));

        let mut req = request(PUZZLE, "A1", "1");
        req.coordinate = None;
        assert_eq!(check(&req), Err(ApiError::MissingField));
    }

    #[test]
    fn test_missing_field_beats_invalid_puzzle() {
        let req = CheckRequest {
            puzzle: Some("not a puzzle".to_owned()),
            coordinate: None,
            value: Some("1".to_owned()),
        };
        assert_eq!(check(&req), Err(ApiError::MissingField));
    }

    #[test]
    fn test_invalid_puzzle_beats_invalid_coordinate() {
        let bad = PUZZLE.replacen('2', "G", 1);
        assert_eq!(
            check(&request(&bad, "A13", "1")),
            Err(ApiError::InvalidCharacters)
        );
    }

    #[test]
    fn test_invalid_length() {
        let short = &PUZZLE[..71];
        assert_eq!(
            check(&request(short, "A1", "1")),
            Err(ApiError::InvalidLength)
        );
    }

    #[test]
    fn test_invalid_coordinate() {
        for label in ["A13", "J1", "A0", "11"] {
            assert_eq!(
                check(&request(PUZZLE, label, "1")),
                Err(ApiError::InvalidCoordinate),
                "{label}"
            );
        }
    }

    #[test]
    fn test_invalid_value() {
        for value in ["0", "10", "A", "."] {
            assert_eq!(
                check(&request(PUZZLE, "A1", value)),
                Err(ApiError::InvalidValue),
                "{value}"
            );
        }
    }

    #[test]
    fn test_invalid_coordinate_beats_invalid_value() {
        assert_eq!(
            check(&request(PUZZLE, "A13", "0")),
            Err(ApiError::InvalidCoordinate)
        );
    }

    #[test]
    fn test_response_serialization() {
        let valid = check_response(&request(PUZZLE, "A1", "1"));
        assert_eq!(
            serde_json::to_value(&valid).unwrap(),
            serde_json::json!({ "valid": true })
        );

        let invalid = check_response(&request(PUZZLE, "A2", "1"));
        assert_eq!(
            serde_json::to_value(&invalid).unwrap(),
            serde_json::json!({ "valid": false, "conflict": ["row", "region"] })
        );

        let error = check_response(&request(PUZZLE, "A13", "1"));
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({ "error": "Invalid coordinate" })
        );
    }
}
