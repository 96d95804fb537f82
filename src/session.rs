//! Play sessions and move validation.
//!
//! A [`Session`] owns the live main board and the tray for one attempt at a
//! [`Puzzle`]. [`Session::attempt_move`] is the only mutation path: it moves a
//! piece transactionally (tentative removal, placement, revert on failure)
//! and re-checks the win condition after every accepted move.
//!
//! Sessions are single-writer. A multi-threaded host must serialize calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::domino::{Domino, PlacedDomino};
use crate::error::{PolarizeError, PolarizeResult};
use crate::light::{self, BeamPaths, Intensity};
use crate::puzzle::{tray_for, Puzzle};

/// Which of the session's two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardId {
    /// The square play area whose readings are judged.
    Main,
    /// The off-board staging area.
    Tray,
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Tray => write!(f, "tray"),
        }
    }
}

/// Identifies one physical piece: its position in the puzzle's initial
/// layout. Two pieces may carry the same catalog domino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece#{}", self.0)
    }
}

/// Where a piece currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Board holding the piece.
    pub board: BoardId,
    /// Placement on that board.
    pub placed: PlacedDomino,
}

/// Gameplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Moves are accepted.
    InProgress,
    /// Main board readings match the target. Terminal for gameplay.
    Solved,
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Destination cells are off the board or occupied.
    Blocked,
    /// The session is already solved.
    SessionSolved,
}

/// Result of [`Session::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The piece moved. `solved` reports the state after the move.
    Accepted {
        /// True if this move solved the puzzle.
        solved: bool,
    },
    /// Nothing changed; the host should snap the piece back.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// True for [`MoveOutcome::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// One player's live attempt at a puzzle.
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    main: Board,
    tray: Board,
    locations: Vec<Location>,
    state: SessionState,
}

impl Session {
    /// Starts a session with every piece at its initial tray placement.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let n = puzzle.n();
        let mut session = Self {
            main: Board::square(n),
            tray: tray_for(n),
            locations: Vec::with_capacity(puzzle.initial_placed().len()),
            state: SessionState::InProgress,
            puzzle,
        };
        session.lay_out();
        session
    }

    fn lay_out(&mut self) {
        self.locations.clear();
        for &placed in self.puzzle.initial_placed() {
            self.tray.place(placed);
            self.locations.push(Location {
                board: BoardId::Tray,
                placed,
            });
        }
        self.state = self.evaluate();
    }

    fn evaluate(&self) -> SessionState {
        if self.puzzle.is_solved_by(&self.main) {
            SessionState::Solved
        } else {
            SessionState::InProgress
        }
    }

    /// Returns every piece to the tray and clears the solved flag.
    pub fn restart(&mut self) {
        self.main.reset();
        self.tray.reset();
        self.lay_out();
        debug!("session restarted");
    }

    /// The puzzle being played.
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Current gameplay state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// True once the main board matches the target.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    /// One of the two boards.
    #[must_use]
    pub const fn board(&self, id: BoardId) -> &Board {
        match id {
            BoardId::Main => &self.main,
            BoardId::Tray => &self.tray,
        }
    }

    fn board_mut(&mut self, id: BoardId) -> &mut Board {
        match id {
            BoardId::Main => &mut self.main,
            BoardId::Tray => &mut self.tray,
        }
    }

    /// The main board.
    #[must_use]
    pub const fn main_board(&self) -> &Board {
        &self.main
    }

    /// The tray.
    #[must_use]
    pub const fn tray_board(&self) -> &Board {
        &self.tray
    }

    /// All pieces with their dominoes.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Domino)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(idx, loc)| (PieceId(idx), loc.placed.domino))
    }

    /// Current location of `piece`.
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::UnknownPiece`] if the session has no such
    /// piece.
    pub fn location(&self, piece: PieceId) -> PolarizeResult<Location> {
        self.locations
            .get(piece.0)
            .copied()
            .ok_or(PolarizeError::UnknownPiece { piece: piece.0 })
    }

    /// The piece covering column `i`, row `j` of `board`, if any.
    #[must_use]
    pub fn piece_at(&self, board: BoardId, i: usize, j: usize) -> Option<PieceId> {
        self.locations
            .iter()
            .position(|loc| loc.board == board && loc.placed.cells().contains(&(i, j)))
            .map(PieceId)
    }

    /// Moves `piece` so that its anchor lands on `(i, j)` of board `to`.
    ///
    /// The piece is tentatively lifted from where it sits, then placed at the
    /// new anchor if both destination cells are free and on the board.
    /// Otherwise the lift is undone and both boards are left exactly as they
    /// were. After an accepted move the main board readings are compared to
    /// the target and the session becomes [`SessionState::Solved`] on an
    /// exact match. A solved session rejects further moves.
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::UnknownPiece`] if the session has no such
    /// piece. Illegal moves are not errors.
    pub fn attempt_move(&mut self, piece: PieceId, to: BoardId, anchor: (usize, usize)) -> PolarizeResult<MoveOutcome> {
        let from = self.location(piece)?;
        if self.is_solved() {
            debug!(%piece, "move ignored, session solved");
            return Ok(MoveOutcome::Rejected(RejectReason::SessionSolved));
        }

        let lifted = self.board(from.board).can_remove(&from.placed);
        if lifted {
            self.board_mut(from.board).remove(&from.placed);
        }

        let (i, j) = anchor;
        let target = from.placed.domino.at(i, j);
        if !self.board(to).can_place(&target) {
            if lifted {
                self.board_mut(from.board).place(from.placed);
            }
            debug!(%piece, board = %to, i, j, "move rejected");
            return Ok(MoveOutcome::Rejected(RejectReason::Blocked));
        }

        self.board_mut(to).place(target);
        self.locations[piece.0] = Location {
            board: to,
            placed: target,
        };
        debug!(%piece, board = %to, i, j, "move accepted");

        self.state = self.evaluate();
        let solved = self.is_solved();
        if solved {
            info!(pieces = self.locations.len(), "puzzle solved");
        }
        Ok(MoveOutcome::Accepted { solved })
    }

    /// Readings of the main board.
    #[must_use]
    pub fn current_lights(&self) -> Vec<u8> {
        light::readings(&self.main)
    }

    /// Readings of the main board, classified.
    #[must_use]
    pub fn current_intensities(&self) -> Vec<Intensity> {
        self.current_lights().into_iter().map(Intensity::from_reading).collect()
    }

    /// Target readings, classified.
    #[must_use]
    pub fn target_intensities(&self) -> Vec<Intensity> {
        self.puzzle.target_intensities()
    }

    /// Beam paths through the reference solution, shown once solved.
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::NotSquare`] only if the puzzle's solution is
    /// malformed, which validated puzzles exclude.
    pub fn solution_paths(&self) -> PolarizeResult<BeamPaths> {
        light::beam_paths(self.puzzle.solution())
    }
}
