//! Puzzle features used to grade difficulty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::domino::{Domino, PlacedDomino};
use crate::light;
use crate::puzzle::Puzzle;

/// Summary statistics of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleFeatures {
    /// Pieces in the puzzle.
    pub num_dominoes: usize,
    /// Distinct catalog entries among the pieces.
    pub num_distinct_dominoes: usize,
    /// Target slots that stay bright.
    pub num_yellow_spots: usize,
    /// Sum over pieces of [`num_valid_domino_places`].
    pub total_num_valid_domino_places: usize,
    /// See [`num_candidate_boards`].
    pub total_candidate_boards: usize,
}

/// Placements of `domino` that, alone on an empty board, do not exceed the
/// target in any slot.
pub fn valid_domino_places(puzzle: &Puzzle, domino: Domino) -> impl Iterator<Item = PlacedDomino> + '_ {
    let n = puzzle.n();
    domino.places(n).filter(move |&pd| {
        let mut board = Board::square(n);
        board.place(pd);
        light::readings(&board)
            .iter()
            .zip(puzzle.lights())
            .all(|(have, want)| have <= want)
    })
}

/// Number of [`valid_domino_places`].
#[must_use]
pub fn num_valid_domino_places(puzzle: &Puzzle, domino: Domino) -> usize {
    valid_domino_places(puzzle, domino).count()
}

/// Distinct boards formed by choosing one individually valid placement per
/// piece, without overlaps.
#[must_use]
pub fn num_candidate_boards(puzzle: &Puzzle) -> usize {
    let options: Vec<Vec<PlacedDomino>> = puzzle
        .dominoes()
        .iter()
        .map(|&d| valid_domino_places(puzzle, d).collect())
        .collect();

    let mut board = Board::square(puzzle.n());
    let mut boards = HashSet::new();
    collect_candidates(&options, &mut board, &mut boards);
    boards.len()
}

fn collect_candidates(options: &[Vec<PlacedDomino>], board: &mut Board, out: &mut HashSet<Board>) {
    let Some((first, rest)) = options.split_first() else {
        out.insert(board.clone());
        return;
    };
    for &pd in first {
        if board.can_place(&pd) {
            board.place(pd);
            collect_candidates(rest, board, out);
            board.remove(&pd);
        }
    }
}

/// Computes all features of a puzzle.
#[must_use]
pub fn puzzle_features(puzzle: &Puzzle) -> PuzzleFeatures {
    let distinct: HashSet<Domino> = puzzle.dominoes().iter().copied().collect();
    PuzzleFeatures {
        num_dominoes: puzzle.dominoes().len(),
        num_distinct_dominoes: distinct.len(),
        num_yellow_spots: puzzle.lights().iter().filter(|&&v| v == 0).count(),
        total_num_valid_domino_places: puzzle
            .dominoes()
            .iter()
            .map(|&d| num_valid_domino_places(puzzle, d))
            .sum(),
        total_candidate_boards: num_candidate_boards(puzzle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domino::CATALOG;

    #[test]
    fn test_valid_places_respect_target() {
        let mut board = Board::square(3);
        board.place(CATALOG[0].at(0, 0));
        let puzzle = Puzzle::from_solution(board).unwrap();
        // Target [1, 0, 0, 1, 1, 0]: only the top-left spot is allowed.
        let places: Vec<_> = valid_domino_places(&puzzle, CATALOG[0]).collect();
        assert_eq!(places, vec![CATALOG[0].at(0, 0)]);
        assert_eq!(num_valid_domino_places(&puzzle, CATALOG[4]), 0);
    }

    #[test]
    fn test_candidate_boards_skip_overlaps() {
        let mut board = Board::square(3);
        board.place(CATALOG[1].at(0, 0));
        board.place(CATALOG[1].at(0, 1));
        let puzzle = Puzzle::from_solution(board).unwrap();
        // Each piece may sit in row 0 or row 1 at column 0; the two pieces
        // are identical, so the only distinct non-overlapping board is the
        // solution itself.
        assert_eq!(num_valid_domino_places(&puzzle, CATALOG[1]), 2);
        assert_eq!(num_candidate_boards(&puzzle), 1);
    }
}
