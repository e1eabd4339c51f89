//! Caller-visible operation errors.

use sudocheck_core::{ParseBoardError, ParseCoordinateError, ParseDigitError};
use sudocheck_solver::SolveError;

/// An error reported to the caller of [`solve`](crate::solve::solve) or
/// [`check`](crate::check::check).
///
/// The `Display` strings are part of the external contract and are rendered
/// verbatim into the `error` field of a response. When several problems
/// apply at once, validation order decides which one is reported: a missing
/// field beats a malformed puzzle, a malformed puzzle beats a malformed
/// coordinate or value, and logical unsolvability is only reported for a
/// well-formed puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    /// A required request field is absent or empty.
    #[display("Required field missing")]
    MissingField,
    /// The puzzle string is not exactly 81 characters.
    #[display("Expected puzzle to be 81 characters long")]
    InvalidLength,
    /// The puzzle string contains a character other than `1`-`9` or `.`.
    #[display("Invalid characters in puzzle")]
    InvalidCharacters,
    /// The coordinate label does not name a cell `A1`-`I9`.
    #[display("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[display("Invalid value")]
    InvalidValue,
    /// The puzzle is well-formed but has no solution.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}

impl From<ParseBoardError> for ApiError {
    fn from(err: ParseBoardError) -> Self {
        match err {
            ParseBoardError::InvalidLength { .. } => Self::InvalidLength,
            ParseBoardError::InvalidCharacter { .. } => Self::InvalidCharacters,
        }
    }
}

impl From<ParseCoordinateError> for ApiError {
    fn from(_: ParseCoordinateError) -> Self {
        Self::InvalidCoordinate
    }
}

impl From<ParseDigitError> for ApiError {
    fn from(_: ParseDigitError) -> Self {
        Self::InvalidValue
    }
}

impl From<SolveError> for ApiError {
    fn from(_: SolveError) -> Self {
        Self::Unsolvable
    }
}

/// Returns the field's content unless it is absent or empty.
///
/// The original service treated an empty string the same as an omitted
/// field, and callers depend on that.
pub(crate) fn require_field(field: Option<&String>) -> Result<&str, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingField),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings_are_the_external_contract() {
        assert_eq!(ApiError::MissingField.to_string(), "Required field missing");
        assert_eq!(
            ApiError::InvalidLength.to_string(),
            "Expected puzzle to be 81 characters long"
        );
        assert_eq!(
            ApiError::InvalidCharacters.to_string(),
            "Invalid characters in puzzle"
        );
        assert_eq!(ApiError::InvalidCoordinate.to_string(), "Invalid coordinate");
        assert_eq!(ApiError::InvalidValue.to_string(), "Invalid value");
        assert_eq!(ApiError::Unsolvable.to_string(), "Puzzle cannot be solved");
    }

    #[test]
    fn test_board_error_conversion() {
        assert_eq!(
            ApiError::from(ParseBoardError::InvalidLength { len: 80 }),
            ApiError::InvalidLength
        );
        assert_eq!(
            ApiError::from(ParseBoardError::InvalidCharacter { ch: 'G', index: 0 }),
            ApiError::InvalidCharacters
        );
    }

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(None), Err(ApiError::MissingField));
        assert_eq!(
            require_field(Some(&String::new())),
            Err(ApiError::MissingField)
        );
        assert_eq!(require_field(Some(&"1".to_owned())), Ok("1"));
    }
}
