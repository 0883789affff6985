//! Parameter validation.

use thiserror::Error;

use super::grid::Grid;

/// The pattern and edit distance cannot form an automaton.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    /// The edit distance must be at least 1.
    #[error("edit distance must be greater than 0, got {edit_distance}")]
    EditDistanceTooSmall {
        /// The rejected edit distance.
        edit_distance: usize,
    },

    /// The pattern must be longer than `edit_distance + 1` symbols.
    #[error(
        "pattern of length {pattern_len} is too short for edit distance {edit_distance} \
         (needs at least {} symbols)",
        edit_distance + 2
    )]
    PatternTooShort {
        /// Length of the pattern in symbols.
        pattern_len: usize,
        /// The requested edit distance.
        edit_distance: usize,
    },
}

/// Check the construction preconditions and derive the grid.
///
/// Requires `edit_distance >= 1` and `pattern_len > edit_distance + 1`.
pub fn validate_parameters(
    pattern_len: usize,
    edit_distance: usize,
) -> Result<Grid, InvalidParameterError> {
    if edit_distance < 1 {
        return Err(InvalidParameterError::EditDistanceTooSmall { edit_distance });
    }
    if pattern_len <= edit_distance + 1 {
        return Err(InvalidParameterError::PatternTooShort {
            pattern_len,
            edit_distance,
        });
    }
    Ok(Grid::new(pattern_len, edit_distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_edit_distance_rejected() {
        assert_eq!(
            validate_parameters(2, 0),
            Err(InvalidParameterError::EditDistanceTooSmall { edit_distance: 0 })
        );
        assert!(validate_parameters(10, 0).is_err());
    }

    #[test]
    fn test_short_pattern_rejected() {
        assert_eq!(
            validate_parameters(2, 1),
            Err(InvalidParameterError::PatternTooShort {
                pattern_len: 2,
                edit_distance: 1
            })
        );
        assert!(validate_parameters(0, 1).is_err());
        assert!(validate_parameters(4, 3).is_err());
    }

    #[test]
    fn test_smallest_accepted_pattern() {
        let grid = validate_parameters(3, 1).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 4);

        let grid = validate_parameters(5, 3).unwrap();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 6);
    }

    #[test]
    fn test_error_display() {
        let err = InvalidParameterError::PatternTooShort {
            pattern_len: 2,
            edit_distance: 1,
        };
        assert!(err.to_string().contains("at least 3 symbols"));
        let err = InvalidParameterError::EditDistanceTooSmall { edit_distance: 0 };
        assert!(err.to_string().contains("greater than 0"));
    }
}
