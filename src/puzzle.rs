//! Immutable daily puzzles.
//!
//! A [`Puzzle`] is built once from externally supplied JSON and validated
//! completely before any session exists. Loading is all-or-nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::config::PuzzleLimits;
use crate::domino::{catalog_at, Domino, Orientation, PlacedDomino};
use crate::error::{PolarizeError, PolarizeResult, PuzzleDataError};
use crate::light::{self, Intensity};

/// Largest value a target light may take: both orientations met, as
/// reported by [`light::lights`].
pub const MAX_LIGHT_VALUE: u8 = 2;

/// A placement as it appears in puzzle files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementData {
    /// Catalog index.
    pub domino: usize,
    /// Anchor column.
    pub i: usize,
    /// Anchor row.
    pub j: usize,
}

impl From<PlacedDomino> for PlacementData {
    fn from(pd: PlacedDomino) -> Self {
        Self {
            domino: usize::from(pd.domino.index()),
            i: pd.i,
            j: pd.j,
        }
    }
}

/// Reference solution as it appears in puzzle files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolutionData {
    /// `n` rows of `n` filter values.
    pub values: Vec<Vec<u8>>,
    /// Placements that produce `values`.
    #[serde(default)]
    pub placed_dominoes: Vec<PlacementData>,
}

/// Puzzle interchange format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Grid size.
    pub n: usize,
    /// Target readings, `2n` entries.
    pub lights: Vec<u8>,
    /// Catalog indices of the usable dominoes.
    pub dominoes: Vec<usize>,
    /// Where each domino starts on the tray.
    pub initial_placed_dominoes: Vec<PlacementData>,
    /// Reference solution.
    pub solution: SolutionData,
}

/// A validated, immutable puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    n: usize,
    lights: Vec<u8>,
    dominoes: Vec<Domino>,
    initial_placed: Vec<PlacedDomino>,
    solution: Board,
}

/// Parses and validates puzzle JSON with default limits.
///
/// # Errors
///
/// Returns [`PolarizeError::InvalidPuzzleData`] if the JSON is malformed or
/// inconsistent.
pub fn load_puzzle(json: &str) -> PolarizeResult<Puzzle> {
    load_puzzle_with(json, &PuzzleLimits::default())
}

/// Parses and validates puzzle JSON.
///
/// # Errors
///
/// Returns [`PolarizeError::InvalidPuzzleData`] if the JSON is malformed,
/// inconsistent, or exceeds `limits`.
pub fn load_puzzle_with(json: &str, limits: &PuzzleLimits) -> PolarizeResult<Puzzle> {
    let data: PuzzleData = serde_json::from_str(json)?;
    Puzzle::from_data(data, limits)
}

/// Empty tray for an `n x n` puzzle: `n` columns, `n - 1` rows (at least one).
#[must_use]
pub fn tray_for(n: usize) -> Board {
    Board::new(n, n.saturating_sub(1).max(1))
}

fn resolve(index: usize) -> Result<Domino, PuzzleDataError> {
    catalog_at(index).map_err(|_| PuzzleDataError::UnknownDomino { index })
}

fn resolve_placement(p: &PlacementData) -> Result<PlacedDomino, PuzzleDataError> {
    Ok(resolve(p.domino)?.at(p.i, p.j))
}

fn sorted_indices(dominoes: impl Iterator<Item = Domino>) -> Vec<u8> {
    let mut v: Vec<u8> = dominoes.map(|d| d.index()).collect();
    v.sort_unstable();
    v
}

impl Puzzle {
    /// Validates interchange data.
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::InvalidPuzzleData`] naming the first
    /// inconsistency found.
    pub fn from_data(data: PuzzleData, limits: &PuzzleLimits) -> PolarizeResult<Self> {
        Self::validate(data, limits).map_err(PolarizeError::from)
    }

    fn validate(data: PuzzleData, limits: &PuzzleLimits) -> Result<Self, PuzzleDataError> {
        let n = data.n;
        if n == 0 {
            return Err(PuzzleDataError::EmptyGrid);
        }
        if n > limits.max_grid_size {
            return Err(PuzzleDataError::GridTooLarge {
                n,
                max: limits.max_grid_size,
            });
        }
        if data.lights.len() != 2 * n {
            return Err(PuzzleDataError::LightsLength {
                expected: 2 * n,
                actual: data.lights.len(),
            });
        }
        if let Some((slot, &value)) = data.lights.iter().enumerate().find(|(_, &v)| v > MAX_LIGHT_VALUE) {
            return Err(PuzzleDataError::InvalidLight { slot, value });
        }

        let dominoes = data
            .dominoes
            .iter()
            .map(|&idx| resolve(idx))
            .collect::<Result<Vec<_>, _>>()?;

        let solution = Self::build_solution(n, &data.solution)?;

        let mut tray = tray_for(n);
        let mut initial_placed = Vec::with_capacity(data.initial_placed_dominoes.len());
        for p in &data.initial_placed_dominoes {
            let pd = resolve_placement(p)?;
            if !tray.can_place(&pd) {
                return Err(PuzzleDataError::IllegalInitialPlacement {
                    domino: pd.domino.index(),
                    i: pd.i,
                    j: pd.j,
                });
            }
            tray.place(pd);
            initial_placed.push(pd);
        }
        if sorted_indices(initial_placed.iter().map(|pd| pd.domino))
            != sorted_indices(dominoes.iter().copied())
        {
            return Err(PuzzleDataError::InitialLayoutMismatch);
        }

        debug!(n, pieces = dominoes.len(), "loaded puzzle");

        Ok(Self {
            n,
            lights: data.lights,
            dominoes,
            initial_placed,
            solution,
        })
    }

    fn build_solution(n: usize, data: &SolutionData) -> Result<Board, PuzzleDataError> {
        let cols = data.values.iter().map(Vec::len).find(|&len| len != n).unwrap_or(n);
        if data.values.len() != n || cols != n {
            return Err(PuzzleDataError::SolutionShape {
                n,
                rows: data.values.len(),
                cols,
            });
        }
        for (j, row) in data.values.iter().enumerate() {
            for (i, &value) in row.iter().enumerate() {
                if value > 2 {
                    return Err(PuzzleDataError::InvalidFilter { i, j, value });
                }
            }
        }

        let mut board = Board::square(n);
        for p in &data.placed_dominoes {
            let pd = resolve_placement(p)?;
            if !board.can_place(&pd) {
                return Err(PuzzleDataError::IllegalSolutionPlacement {
                    domino: pd.domino.index(),
                    i: pd.i,
                    j: pd.j,
                });
            }
            board.place(pd);
        }
        if board.to_rows() != data.values {
            return Err(PuzzleDataError::SolutionMismatch);
        }
        Ok(board)
    }

    /// Builds a puzzle whose target is the readings of `solution`, with every
    /// placed domino packed onto the tray (vertical pieces first).
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::NotSquare`] if `solution` is not square, or
    /// [`PolarizeError::InvalidPuzzleData`] if the pieces do not fit the tray.
    pub fn from_solution(solution: Board) -> PolarizeResult<Self> {
        let lights = light::lights(&solution)?;
        let n = solution.width();
        if n == 0 {
            return Err(PuzzleDataError::EmptyGrid.into());
        }

        let mut dominoes: Vec<Domino> = solution.placed().iter().map(|pd| pd.domino).collect();
        dominoes.sort_by_key(|d| (d.orientation != Orientation::Vertical, d.index()));

        let mut tray = tray_for(n);
        let mut initial_placed = Vec::with_capacity(dominoes.len());
        for &domino in &dominoes {
            let spot = (0..tray.height())
                .flat_map(|j| (0..tray.width()).map(move |i| (i, j)))
                .map(|(i, j)| domino.at(i, j))
                .find(|pd| tray.can_place(pd))
                .ok_or(PuzzleDataError::IllegalInitialPlacement {
                    domino: domino.index(),
                    i: 0,
                    j: 0,
                })?;
            tray.place(spot);
            initial_placed.push(spot);
        }

        Ok(Self {
            n,
            lights,
            dominoes,
            initial_placed,
            solution,
        })
    }

    /// Grid size.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Target readings, `2n` entries in [`crate::light::lights`] layout.
    #[must_use]
    pub fn lights(&self) -> &[u8] {
        &self.lights
    }

    /// Target readings classified for display.
    #[must_use]
    pub fn target_intensities(&self) -> Vec<Intensity> {
        self.lights.iter().map(|&v| Intensity::from_reading(v)).collect()
    }

    /// Dominoes usable in this puzzle.
    #[must_use]
    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    /// Starting tray layout, one entry per piece.
    #[must_use]
    pub fn initial_placed(&self) -> &[PlacedDomino] {
        &self.initial_placed
    }

    /// Reference solution, used for beam display only.
    #[must_use]
    pub const fn solution(&self) -> &Board {
        &self.solution
    }

    /// True if `board`'s readings equal the target exactly.
    #[must_use]
    pub fn is_solved_by(&self, board: &Board) -> bool {
        board.width() == self.n && board.is_square() && light::readings(board) == self.lights
    }

    /// Converts back to interchange data.
    #[must_use]
    pub fn to_data(&self) -> PuzzleData {
        PuzzleData {
            n: self.n,
            lights: self.lights.clone(),
            dominoes: self.dominoes.iter().map(|d| usize::from(d.index())).collect(),
            initial_placed_dominoes: self.initial_placed.iter().copied().map(PlacementData::from).collect(),
            solution: SolutionData {
                values: self.solution.to_rows(),
                placed_dominoes: self.solution.placed().iter().copied().map(PlacementData::from).collect(),
            },
        }
    }

    /// Serializes to puzzle-file JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PolarizeError::InvalidPuzzleData`] if serialization fails.
    pub fn to_json(&self) -> PolarizeResult<String> {
        Ok(serde_json::to_string(&self.to_data())?)
    }
}
