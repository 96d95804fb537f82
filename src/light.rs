//! Light propagation.
//!
//! A beam enters every row from the left and every column from the top.
//! Passing through a filter ORs its bits into the beam state, so the state
//! records which filter orientations the beam has met. Readings are that
//! state reduced by bit count: 0 filters met, one orientation met, or both.
//!
//! Slot layout of [`lights`]: slots `0..n` are the row readings (beam from
//! the left of row `j`), slots `n..2n` are the column readings (beam from the
//! top of column `i`).

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{PolarizeError, PolarizeResult};

/// Observed brightness of a beam reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// No filter met.
    Bright,
    /// One filter orientation met.
    Dim,
    /// Both orientations met.
    Dark,
}

impl Intensity {
    /// Classifies a bit-count-reduced reading.
    #[must_use]
    pub const fn from_reading(reading: u8) -> Self {
        match reading {
            0 => Self::Bright,
            1 => Self::Dim,
            _ => Self::Dark,
        }
    }

    /// Classifies a raw OR value by reducing it first.
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        Self::from_reading(bit_count(raw))
    }
}

/// Number of set bits.
#[must_use]
pub fn bit_count(value: u8) -> u8 {
    u8::try_from(value.count_ones()).unwrap_or(u8::MAX)
}

fn ensure_square(board: &Board) -> PolarizeResult<()> {
    if board.is_square() {
        Ok(())
    } else {
        Err(PolarizeError::NotSquare {
            width: board.width(),
            height: board.height(),
        })
    }
}

/// Raw OR readings for any board: `height` row slots then `width` column
/// slots.
pub(crate) fn raw_readings(board: &Board) -> Vec<u8> {
    let mut out = Vec::with_capacity(board.height() + board.width());
    out.extend(board.rows().take(board.height()).map(|row| row.iter().fold(0, |acc, &v| acc | v)));
    out.extend((0..board.width()).map(|i| board.column(i).fold(0, |acc, v| acc | v)));
    out
}

/// Reduced readings for any board, same layout as [`raw_readings`].
pub(crate) fn readings(board: &Board) -> Vec<u8> {
    raw_readings(board).into_iter().map(bit_count).collect()
}

/// Edge readings of a square board, reduced by bit count (0, 1 or 2).
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn lights(board: &Board) -> PolarizeResult<Vec<u8>> {
    ensure_square(board)?;
    Ok(readings(board))
}

/// Edge readings of a square board as raw OR values (0 to 3).
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn raw_lights(board: &Board) -> PolarizeResult<Vec<u8>> {
    ensure_square(board)?;
    Ok(raw_readings(board))
}

/// Edge readings classified into intensities.
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn intensities(board: &Board) -> PolarizeResult<Vec<Intensity>> {
    Ok(lights(board)?.into_iter().map(Intensity::from_reading).collect())
}

/// Beam state along each row.
///
/// `paths[j][k]` is the reduced state of row `j`'s beam at boundary `k`:
/// `k = 0` is the left edge, `k = n` the right edge, so each row has
/// `n + 1` entries.
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn paths_horizontal(board: &Board) -> PolarizeResult<Vec<Vec<u8>>> {
    ensure_square(board)?;
    Ok(board
        .rows()
        .take(board.height())
        .map(|row| prefix_readings(row.iter().copied()))
        .collect())
}

/// Beam state along each column.
///
/// `paths[k][i]` is the reduced state of column `i`'s beam at boundary `k`:
/// `k = 0` is the top edge, `k = n` the bottom edge, so there are `n + 1`
/// rows of `n` entries.
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn paths_vertical(board: &Board) -> PolarizeResult<Vec<Vec<u8>>> {
    ensure_square(board)?;
    let n = board.width();
    let columns: Vec<Vec<u8>> = (0..n).map(|i| prefix_readings(board.column(i))).collect();
    Ok((0..=n)
        .map(|k| columns.iter().map(|col| col[k]).collect())
        .collect())
}

/// Both beam families of one board, for drawing lit segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamPaths {
    /// See [`paths_horizontal`].
    pub horizontal: Vec<Vec<u8>>,
    /// See [`paths_vertical`].
    pub vertical: Vec<Vec<u8>>,
}

/// Computes [`paths_horizontal`] and [`paths_vertical`] together.
///
/// # Errors
///
/// Returns [`PolarizeError::NotSquare`] for tray-shaped boards.
pub fn beam_paths(board: &Board) -> PolarizeResult<BeamPaths> {
    Ok(BeamPaths {
        horizontal: paths_horizontal(board)?,
        vertical: paths_vertical(board)?,
    })
}

fn prefix_readings(cells: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut state = 0;
    let mut out = vec![0];
    for v in cells {
        state |= v;
        out.push(bit_count(state));
    }
    out
}
