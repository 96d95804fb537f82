//! Grid of filter values.
//!
//! A [`Board`] is a `width x height` grid, addressed by column `i` and row
//! `j`, plus the dominoes currently placed on it. The main play area is
//! square; the off-board tray uses independent column and row bounds.
//!
//! All operations mutate in place. There is no undo log: callers that need
//! transactional moves re-place the previous placement themselves (see
//! [`crate::session`]).

use std::fmt;

use serde::Serialize;

use crate::domino::{Filter, PlacedDomino};

/// Mutable cell-filter state.
///
/// Invariant: every nonzero cell holds the filter of exactly one entry of
/// [`Board::placed`], and the placed list is kept sorted so two boards with
/// the same pieces compare equal regardless of placement order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major filter bits, 0 for an empty cell.
    values: Vec<u8>,
    placed: Vec<PlacedDomino>,
}

impl Board {
    /// Creates an empty board with `width` columns and `height` rows.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0; width * height],
            placed: Vec::new(),
        }
    }

    /// Creates an empty `n x n` board.
    #[must_use]
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Number of columns (bound on `i`).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (bound on `j`).
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// True if the board can be used for light queries.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True if no domino is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Dominoes currently on the board, in sorted order.
    #[must_use]
    pub fn placed(&self) -> &[PlacedDomino] {
        &self.placed
    }

    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.width && j < self.height).then(|| j * self.width + i)
    }

    /// Raw filter bits at column `i`, row `j`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        self.offset(i, j).map(|idx| self.values[idx])
    }

    /// Filter at column `i`, row `j`, or `None` if empty or out of bounds.
    #[must_use]
    pub fn filter_at(&self, i: usize, j: usize) -> Option<Filter> {
        self.get(i, j).and_then(Filter::from_bits)
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.values.chunks(self.width.max(1))
    }

    /// Iterates over column `i`, top to bottom.
    pub fn column(&self, i: usize) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().skip(i).step_by(self.width.max(1)).copied()
    }

    /// Rows as owned vectors, the shape used in puzzle files.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// True iff both cells lie on the board and are empty.
    #[must_use]
    pub fn can_place(&self, placed: &PlacedDomino) -> bool {
        placed.cells().iter().all(|&(i, j)| self.get(i, j) == Some(0))
    }

    /// Writes the domino's filters into its two cells.
    ///
    /// The caller must have checked [`Self::can_place`]; this does not
    /// re-check.
    ///
    /// # Panics
    ///
    /// Panics if a cell is out of bounds.
    pub fn place(&mut self, placed: PlacedDomino) {
        debug_assert!(self.can_place(&placed), "placing onto occupied or missing cells");
        for ((i, j), filter) in placed.cells().into_iter().zip(placed.filters()) {
            let idx = j * self.width + i;
            self.values[idx] = filter.bits();
        }
        let pos = self.placed.binary_search(&placed).unwrap_or_else(|pos| pos);
        self.placed.insert(pos, placed);
    }

    /// True iff both cells lie on the board and hold exactly this domino's
    /// filters.
    #[must_use]
    pub fn can_remove(&self, placed: &PlacedDomino) -> bool {
        placed
            .cells()
            .iter()
            .zip(placed.filters())
            .all(|(&(i, j), filter)| self.get(i, j) == Some(filter.bits()))
    }

    /// Clears the domino's two cells.
    ///
    /// Any placed entry overlapping those cells is dropped along with its
    /// cells, so the grid and the placed list stay in step even when the
    /// argument does not match what is on the board.
    ///
    /// # Panics
    ///
    /// Panics if a cell is out of bounds.
    pub fn remove(&mut self, placed: &PlacedDomino) {
        let cells = placed.cells();
        let mut cleared = cells.to_vec();
        self.placed.retain(|p| {
            let p_cells = p.cells();
            let overlaps = p_cells.iter().any(|c| cells.contains(c));
            if overlaps {
                cleared.extend(p_cells);
            }
            !overlaps
        });
        for (i, j) in cleared {
            let idx = j * self.width + i;
            self.values[idx] = 0;
        }
    }

    /// Clears every cell and forgets all placements.
    pub fn reset(&mut self) {
        self.values.fill(0);
        self.placed.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &bits in row {
                let c = Filter::from_bits(bits).map_or('.', Filter::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
