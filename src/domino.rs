//! The domino catalog.
//!
//! A domino is a two-cell piece with a fixed orientation carrying one
//! polarizing filter per cell. There are exactly eight of them, and their
//! order in [`CATALOG`] is part of the puzzle file vocabulary: puzzle data
//! refers to dominoes by catalog index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PolarizeError, PolarizeResult};

/// A polarizing filter carried by one half of a domino.
///
/// The discriminants are distinct bits so that OR-combining the filters a
/// beam passes through records which orientations it has met. Zero on a
/// board means "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Filter {
    /// Diagonal+ (`/`).
    Pos45 = 1,
    /// Diagonal- (`\`).
    Neg45 = 2,
}

impl Filter {
    /// Both filters, in bit order.
    pub const ALL: [Self; 2] = [Self::Pos45, Self::Neg45];

    /// Board value of this filter.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Parses a board value. Returns `None` for zero and for anything that
    /// is not a single filter.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(Self::Pos45),
            2 => Some(Self::Neg45),
            _ => None,
        }
    }

    /// Single-character glyph used in text renderings of a board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pos45 => '/',
            Self::Neg45 => '\\',
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Orientation of a domino on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Second cell is one column to the right of the anchor.
    Horizontal,
    /// Second cell is one row below the anchor.
    Vertical,
}

impl Orientation {
    /// Column and row offset of the second cell relative to the anchor.
    #[must_use]
    pub const fn offset(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }
}

/// An immutable catalog entry.
///
/// Serializes as its catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Domino {
    index: u8,
    /// How the two cells are laid out.
    pub orientation: Orientation,
    /// Filter on the anchor cell.
    pub filter1: Filter,
    /// Filter on the second cell.
    pub filter2: Filter,
}

/// Number of catalog entries.
pub const CATALOG_SIZE: usize = 8;

/// Every placeable domino, in puzzle-file order.
pub const CATALOG: [Domino; CATALOG_SIZE] = [
    Domino::new(0, Orientation::Horizontal, Filter::Pos45, Filter::Pos45),
    Domino::new(1, Orientation::Horizontal, Filter::Pos45, Filter::Neg45),
    Domino::new(2, Orientation::Horizontal, Filter::Neg45, Filter::Pos45),
    Domino::new(3, Orientation::Horizontal, Filter::Neg45, Filter::Neg45),
    Domino::new(4, Orientation::Vertical, Filter::Pos45, Filter::Pos45),
    Domino::new(5, Orientation::Vertical, Filter::Pos45, Filter::Neg45),
    Domino::new(6, Orientation::Vertical, Filter::Neg45, Filter::Pos45),
    Domino::new(7, Orientation::Vertical, Filter::Neg45, Filter::Neg45),
];

/// Looks up a domino by catalog index.
///
/// # Errors
///
/// Returns [`PolarizeError::OutOfRange`] if `index` is not in `0..8`.
pub fn catalog_at(index: usize) -> PolarizeResult<Domino> {
    CATALOG
        .get(index)
        .copied()
        .ok_or(PolarizeError::OutOfRange { index })
}

impl Domino {
    const fn new(index: u8, orientation: Orientation, filter1: Filter, filter2: Filter) -> Self {
        Self {
            index,
            orientation,
            filter1,
            filter2,
        }
    }

    /// Catalog index of this domino.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Binds this domino to an anchor cell.
    #[must_use]
    pub const fn at(self, i: usize, j: usize) -> PlacedDomino {
        PlacedDomino { domino: self, i, j }
    }

    /// Every anchor at which this domino fits on an empty `n x n` board,
    /// row by row.
    pub fn places(self, n: usize) -> impl Iterator<Item = PlacedDomino> {
        let (di, dj) = self.orientation.offset();
        let cols = n.saturating_sub(di);
        let rows = n.saturating_sub(dj);
        (0..rows).flat_map(move |j| (0..cols).map(move |i| self.at(i, j)))
    }
}

impl TryFrom<u8> for Domino {
    type Error = PolarizeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        catalog_at(usize::from(index))
    }
}

impl From<Domino> for u8 {
    fn from(domino: Domino) -> Self {
        domino.index
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.orientation {
            Orientation::Horizontal => '-',
            Orientation::Vertical => '|',
        };
        write!(f, "{}{sep}{}", self.filter1, self.filter2)
    }
}

/// A domino bound to an anchor cell.
///
/// `i` is the column and `j` the row. The second occupied cell is derived
/// from the orientation, see [`PlacedDomino::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacedDomino {
    /// The piece.
    pub domino: Domino,
    /// Anchor column.
    pub i: usize,
    /// Anchor row.
    pub j: usize,
}

impl PlacedDomino {
    /// Creates a placement.
    #[must_use]
    pub const fn new(domino: Domino, i: usize, j: usize) -> Self {
        Self { domino, i, j }
    }

    /// The two occupied `(column, row)` cells, anchor first.
    ///
    /// Coordinates saturate instead of overflowing, so a saturated cell is
    /// always out of bounds for any real board.
    #[must_use]
    pub const fn cells(&self) -> [(usize, usize); 2] {
        let (di, dj) = self.domino.orientation.offset();
        [
            (self.i, self.j),
            (self.i.saturating_add(di), self.j.saturating_add(dj)),
        ]
    }

    /// Filter values written into [`Self::cells`], in the same order.
    #[must_use]
    pub const fn filters(&self) -> [Filter; 2] {
        [self.domino.filter1, self.domino.filter2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        for (idx, domino) in CATALOG.iter().enumerate() {
            assert_eq!(usize::from(domino.index()), idx);
        }
        assert_eq!(CATALOG[1].orientation, Orientation::Horizontal);
        assert_eq!(CATALOG[1].filter1, Filter::Pos45);
        assert_eq!(CATALOG[1].filter2, Filter::Neg45);
        assert_eq!(CATALOG[6].orientation, Orientation::Vertical);
        assert_eq!(CATALOG[6].filter1, Filter::Neg45);
        assert_eq!(CATALOG[6].filter2, Filter::Pos45);
    }

    #[test]
    fn test_catalog_covers_every_combination() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for f1 in Filter::ALL {
                for f2 in Filter::ALL {
                    let count = CATALOG
                        .iter()
                        .filter(|d| d.orientation == orientation && d.filter1 == f1 && d.filter2 == f2)
                        .count();
                    assert_eq!(count, 1);
                }
            }
        }
    }

    #[test]
    fn test_catalog_at_out_of_range() {
        assert_eq!(catalog_at(7).unwrap(), CATALOG[7]);
        assert_eq!(catalog_at(8), Err(PolarizeError::OutOfRange { index: 8 }));
    }

    #[test]
    fn test_filter_bits() {
        assert_eq!(Filter::Pos45.bits() & Filter::Neg45.bits(), 0);
        assert_eq!(Filter::from_bits(0), None);
        assert_eq!(Filter::from_bits(3), None);
        assert_eq!(Filter::from_bits(2), Some(Filter::Neg45));
    }

    #[test]
    fn test_placed_cells() {
        let h = CATALOG[0].at(1, 2);
        assert_eq!(h.cells(), [(1, 2), (2, 2)]);
        let v = CATALOG[4].at(1, 2);
        assert_eq!(v.cells(), [(1, 2), (1, 3)]);
        let edge = CATALOG[0].at(usize::MAX, 0);
        assert_eq!(edge.cells()[1], (usize::MAX, 0));
    }

    #[test]
    fn test_places_on_square_board() {
        assert_eq!(CATALOG[0].places(4).count(), 12);
        assert_eq!(CATALOG[7].places(4).count(), 12);
        assert!(CATALOG[5].places(4).all(|pd| pd.j < 3 && pd.i < 4));
        assert_eq!(CATALOG[0].places(1).count(), 0);
    }

    #[test]
    fn test_domino_serializes_as_index() {
        let json = serde_json::to_string(&CATALOG[5].at(2, 1)).unwrap();
        assert_eq!(json, r#"{"domino":5,"i":2,"j":1}"#);
        let back: PlacedDomino = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CATALOG[5].at(2, 1));
        assert!(serde_json::from_str::<Domino>("8").is_err());
    }
}
