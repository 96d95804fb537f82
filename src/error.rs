//! Error types for Polarize.
//!
//! All errors are strongly typed using thiserror. Illegal moves are not
//! errors: they surface as [`crate::session::MoveOutcome::Rejected`].

use thiserror::Error;

/// Reasons puzzle data is rejected before any session is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleDataError {
    #[error("Malformed puzzle JSON: {message}")]
    Json {
        message: String,
    },

    #[error("Grid size must be at least 1")]
    EmptyGrid,

    #[error("Grid size {n} exceeds maximum of {max}")]
    GridTooLarge {
        n: usize,
        max: usize,
    },

    #[error("Expected {expected} light values, got {actual}")]
    LightsLength {
        expected: usize,
        actual: usize,
    },

    #[error("Light value {value} at slot {slot} is not a valid reading")]
    InvalidLight {
        slot: usize,
        value: u8,
    },

    #[error("Domino index {index} is not in the catalog")]
    UnknownDomino {
        index: usize,
    },

    #[error("Solution grid is {rows}x{cols}, expected {n}x{n}")]
    SolutionShape {
        n: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Solution cell ({i}, {j}) holds {value}, which is not a filter")]
    InvalidFilter {
        i: usize,
        j: usize,
        value: u8,
    },

    #[error("Solution domino {domino} at ({i}, {j}) cannot be placed")]
    IllegalSolutionPlacement {
        domino: u8,
        i: usize,
        j: usize,
    },

    #[error("Solution placements do not reproduce the solution values")]
    SolutionMismatch,

    #[error("Initial domino {domino} at ({i}, {j}) does not fit the tray")]
    IllegalInitialPlacement {
        domino: u8,
        i: usize,
        j: usize,
    },

    #[error("Initial layout does not hold exactly the puzzle's dominoes")]
    InitialLayoutMismatch,
}

/// Top-level error type for Polarize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolarizeError {
    #[error("Catalog index {index} is out of range [0, 7]")]
    OutOfRange {
        index: usize,
    },

    #[error("Invalid puzzle data: {0}")]
    InvalidPuzzleData(#[from] PuzzleDataError),

    #[error("Light queries need a square board, got {width}x{height}")]
    NotSquare {
        width: usize,
        height: usize,
    },

    #[error("Unknown piece: {piece}")]
    UnknownPiece {
        piece: usize,
    },
}

impl PolarizeError {
    /// Returns true if this is a catalog lookup failure.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns true if this is a puzzle data failure.
    #[must_use]
    pub const fn is_invalid_puzzle_data(&self) -> bool {
        matches!(self, Self::InvalidPuzzleData(_))
    }
}

impl From<serde_json::Error> for PolarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPuzzleData(PuzzleDataError::Json {
            message: err.to_string(),
        })
    }
}

/// Result type alias for Polarize operations.
pub type PolarizeResult<T> = Result<T, PolarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolarizeError::OutOfRange { index: 9 };
        assert!(err.to_string().contains('9'));

        let err: PolarizeError = PuzzleDataError::LightsLength {
            expected: 8,
            actual: 7,
        }
        .into();
        assert!(err.to_string().contains("Expected 8 light values, got 7"));
    }

    #[test]
    fn test_error_classification() {
        assert!(PolarizeError::OutOfRange { index: 8 }.is_out_of_range());
        assert!(!PolarizeError::OutOfRange { index: 8 }.is_invalid_puzzle_data());

        let err = PolarizeError::from(PuzzleDataError::EmptyGrid);
        assert!(err.is_invalid_puzzle_data());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_json_error_is_puzzle_data_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = PolarizeError::from(json_err);
        assert!(matches!(
            err,
            PolarizeError::InvalidPuzzleData(PuzzleDataError::Json { .. })
        ));
    }
}
