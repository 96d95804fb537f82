//! Tunables for loading and solving puzzles.

use serde::{Deserialize, Serialize};

/// Limits applied when accepting puzzle data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleLimits {
    /// Largest accepted grid size `n`.
    pub max_grid_size: usize,
}

impl Default for PuzzleLimits {
    fn default() -> Self {
        Self { max_grid_size: 8 }
    }
}

/// Solver options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Also accept boards that use a sub-multiset of the puzzle's dominoes.
    pub fewer_pieces_allowed: bool,
    /// Stop once this many solutions are found.
    pub max_solutions: Option<usize>,
}

impl SolveConfig {
    /// Exact piece set, no cap.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            fewer_pieces_allowed: false,
            max_solutions: None,
        }
    }

    /// Any sub-multiset of pieces, no cap.
    #[must_use]
    pub const fn fewer_pieces() -> Self {
        Self {
            fewer_pieces_allowed: true,
            max_solutions: None,
        }
    }

    /// Returns a copy capped at `max` solutions.
    #[must_use]
    pub const fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PuzzleLimits::default().max_grid_size, 8);
        assert_eq!(SolveConfig::default(), SolveConfig::exact());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: SolveConfig = serde_json::from_str(r#"{"fewer_pieces_allowed": true}"#).unwrap();
        assert_eq!(cfg, SolveConfig::fewer_pieces());
        let limits: PuzzleLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, PuzzleLimits::default());
    }
}
