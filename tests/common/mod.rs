//! Published puzzles shared by the end-to-end tests.

#![allow(dead_code)]

/// Published 2025-01-11.
pub const PUZZLE_0111: &str = r#"{"n": 4, "lights": [1, 2, 2, 0, 0, 1, 2, 2], "dominoes": [2, 6, 6], "initial_placed_dominoes": [{"domino": 6, "i": 0, "j": 0}, {"domino": 2, "i": 2, "j": 0}, {"domino": 6, "i": 1, "j": 0}], "solution": {"values": [[0, 0, 2, 0], [0, 0, 1, 2], [0, 2, 1, 1], [0, 0, 0, 0]], "placed_dominoes": [{"domino": 2, "i": 1, "j": 2}, {"domino": 6, "i": 3, "j": 1}, {"domino": 6, "i": 2, "j": 0}]}}"#;

/// Published 2025-01-18. Unique with its four pieces, ambiguous with fewer.
pub const PUZZLE_0118: &str = r#"{"n": 4, "lights": [2, 0, 1, 2, 1, 1, 2, 2], "dominoes": [4, 2, 1, 3], "initial_placed_dominoes": [{"domino": 1, "i": 1, "j": 1}, {"domino": 2, "i": 1, "j": 0}, {"domino": 4, "i": 0, "j": 0}, {"domino": 3, "i": 0, "j": 2}], "solution": {"values": [[0, 0, 1, 2], [0, 0, 0, 0], [2, 2, 0, 0], [0, 0, 2, 1]], "placed_dominoes": [{"domino": 1, "i": 2, "j": 0}, {"domino": 2, "i": 2, "j": 3}, {"domino": 3, "i": 0, "j": 2}]}}"#;

/// Published 2025-01-20.
pub const PUZZLE_0120: &str = r#"{"n": 4, "lights": [2, 2, 1, 1, 0, 2, 2, 1], "dominoes": [5, 0, 5, 1], "initial_placed_dominoes": [{"domino": 5, "i": 0, "j": 0}, {"domino": 0, "i": 2, "j": 0}, {"domino": 5, "i": 1, "j": 0}, {"domino": 1, "i": 2, "j": 1}], "solution": {"values": [[0, 1, 1, 2], [0, 2, 1, 0], [0, 0, 2, 0], [0, 1, 1, 0]], "placed_dominoes": [{"domino": 1, "i": 2, "j": 0}, {"domino": 0, "i": 1, "j": 3}, {"domino": 5, "i": 2, "j": 1}, {"domino": 5, "i": 1, "j": 0}]}}"#;

/// Published 2025-02-01.
pub const PUZZLE_0201: &str = r#"{"n": 4, "lights": [2, 2, 1, 2, 2, 1, 0, 2], "dominoes": [4, 5, 3, 1], "initial_placed_dominoes": [{"domino": 1, "i": 2, "j": 1}, {"domino": 3, "i": 2, "j": 0}, {"domino": 5, "i": 1, "j": 0}, {"domino": 4, "i": 0, "j": 0}], "solution": {"values": [[2, 2, 0, 1], [1, 0, 0, 2], [1, 0, 0, 0], [1, 2, 0, 0]], "placed_dominoes": [{"domino": 4, "i": 0, "j": 1}, {"domino": 5, "i": 3, "j": 0}, {"domino": 3, "i": 0, "j": 0}, {"domino": 1, "i": 0, "j": 3}]}}"#;

/// Trivial puzzle: nothing to place, everything bright.
pub const EMPTY_PUZZLE: &str = r#"{"n": 4, "lights": [0, 0, 0, 0, 0, 0, 0, 0], "dominoes": [], "initial_placed_dominoes": [], "solution": {"values": [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], "placed_dominoes": []}}"#;
