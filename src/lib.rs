//! # Polarize
//!
//! Board model for Polarize, a daily logic puzzle. Players place domino
//! shaped polarizing filters on a square grid so that beams entering from the
//! left and top edges reach the opposite edges with a target brightness.
//!
//! ## Core Concepts
//!
//! - **Domino**: one of eight fixed pieces, two cells with one filter each
//! - **Board**: grid of filter values with placement legality checks
//! - **Lights**: per-edge beam readings computed from a board
//! - **Puzzle**: immutable target readings, pieces and reference solution
//! - **Session**: live main board plus tray, driven by transactional moves
//!
//! ## Usage
//!
//! ```rust
//! use polarize::{load_puzzle, BoardId, MoveOutcome, PieceId, Session};
//!
//! let puzzle = load_puzzle(r#"{
//!     "n": 2, "lights": [2, 0, 1, 1], "dominoes": [1],
//!     "initial_placed_dominoes": [{"domino": 1, "i": 0, "j": 0}],
//!     "solution": {"values": [[1, 2], [0, 0]],
//!                  "placed_dominoes": [{"domino": 1, "i": 0, "j": 0}]}
//! }"#)?;
//!
//! let mut session = Session::new(puzzle);
//! let outcome = session.attempt_move(PieceId(0), BoardId::Main, (0, 0))?;
//! assert_eq!(outcome, MoveOutcome::Accepted { solved: true });
//! # Ok::<(), polarize::PolarizeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod config;
pub mod difficulty;
pub mod domino;
pub mod error;
pub mod light;
pub mod puzzle;
pub mod session;
pub mod solver;

// Re-export primary types at crate root for convenience
pub use board::Board;
pub use config::{PuzzleLimits, SolveConfig};
pub use difficulty::{num_candidate_boards, num_valid_domino_places, puzzle_features, PuzzleFeatures};
pub use domino::{catalog_at, Domino, Filter, Orientation, PlacedDomino, CATALOG};
pub use error::{PolarizeError, PolarizeResult, PuzzleDataError};
pub use light::{beam_paths, intensities, lights, paths_horizontal, paths_vertical, raw_lights, BeamPaths, Intensity};
pub use puzzle::{load_puzzle, load_puzzle_with, Puzzle, PuzzleData};
pub use session::{BoardId, Location, MoveOutcome, PieceId, RejectReason, Session, SessionState};
pub use solver::{has_unique_solution, solve};
