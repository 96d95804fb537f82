//! Exhaustive solver.
//!
//! Enumerates boards built from a puzzle's dominoes and keeps those whose
//! readings equal the target. Readings only grow as filters are added, so
//! any partial board that already exceeds the target in some slot is
//! abandoned.

use std::collections::HashSet;

use tracing::debug;

use crate::board::Board;
use crate::config::SolveConfig;
use crate::domino::Domino;
use crate::light;
use crate::puzzle::Puzzle;

struct Search<'a> {
    target: &'a [u8],
    pieces: Vec<Domino>,
    n: usize,
    config: SolveConfig,
    board: Board,
    seen: HashSet<Board>,
    found: Vec<Board>,
    examined: u64,
}

impl Search<'_> {
    fn done(&self) -> bool {
        self.config.max_solutions.is_some_and(|max| self.found.len() >= max)
    }

    fn within_target(&self) -> bool {
        light::readings(&self.board)
            .iter()
            .zip(self.target)
            .all(|(have, want)| have <= want)
    }

    fn visit(&mut self, k: usize) {
        if self.done() {
            return;
        }
        if k == self.pieces.len() {
            self.examined += 1;
            if light::readings(&self.board) == self.target && self.seen.insert(self.board.clone()) {
                self.found.push(self.board.clone());
            }
            return;
        }

        if self.config.fewer_pieces_allowed {
            self.visit(k + 1);
        }

        let domino = self.pieces[k];
        for pd in domino.places(self.n) {
            if !self.board.can_place(&pd) {
                continue;
            }
            self.board.place(pd);
            if self.within_target() {
                self.visit(k + 1);
            }
            self.board.remove(&pd);
            if self.done() {
                return;
            }
        }
    }
}

/// Every distinct board whose readings equal the puzzle's target.
///
/// Uses exactly the puzzle's dominoes, or any sub-multiset of them when
/// `config.fewer_pieces_allowed` is set. Boards are distinct by their set of
/// placed dominoes.
#[must_use]
pub fn solve(puzzle: &Puzzle, config: &SolveConfig) -> Vec<Board> {
    let mut pieces = puzzle.dominoes().to_vec();
    pieces.sort_unstable();

    let mut search = Search {
        target: puzzle.lights(),
        pieces,
        n: puzzle.n(),
        config: *config,
        board: Board::square(puzzle.n()),
        seen: HashSet::new(),
        found: Vec::new(),
        examined: 0,
    };
    search.visit(0);

    debug!(
        examined = search.examined,
        solutions = search.found.len(),
        fewer_pieces = config.fewer_pieces_allowed,
        "solve finished"
    );
    search.found
}

/// True if exactly one board solves the puzzle.
#[must_use]
pub fn has_unique_solution(puzzle: &Puzzle, config: &SolveConfig) -> bool {
    solve(puzzle, &config.with_max_solutions(2)).len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domino::CATALOG;

    #[test]
    fn test_single_piece_unique() {
        let mut board = Board::square(3);
        board.place(CATALOG[5].at(1, 1));
        let puzzle = Puzzle::from_solution(board.clone()).unwrap();

        let solutions = solve(&puzzle, &SolveConfig::exact());
        assert_eq!(solutions, vec![board]);
        assert!(has_unique_solution(&puzzle, &SolveConfig::exact()));
    }

    #[test]
    fn test_swappable_rows_are_ambiguous() {
        // Crossed pieces stacked in the top two rows; the pieces can trade
        // rows without changing any reading.
        let mut board = Board::square(3);
        board.place(CATALOG[1].at(0, 0));
        board.place(CATALOG[2].at(0, 1));
        let puzzle = Puzzle::from_solution(board).unwrap();
        assert_eq!(puzzle.lights(), &[2, 2, 0, 2, 2, 0]);

        assert_eq!(solve(&puzzle, &SolveConfig::exact()).len(), 2);
        assert!(!has_unique_solution(&puzzle, &SolveConfig::exact()));
        assert_eq!(solve(&puzzle, &SolveConfig::fewer_pieces()).len(), 2);
    }

    #[test]
    fn test_identical_pieces_are_not_double_counted() {
        let mut board = Board::square(3);
        board.place(CATALOG[1].at(0, 0));
        board.place(CATALOG[1].at(0, 1));
        let puzzle = Puzzle::from_solution(board.clone()).unwrap();
        assert_eq!(puzzle.lights(), &[2, 2, 0, 1, 1, 0]);
        assert_eq!(solve(&puzzle, &SolveConfig::exact()), vec![board]);
    }

    #[test]
    fn test_max_solutions_caps_search() {
        let mut board = Board::square(3);
        board.place(CATALOG[1].at(0, 0));
        board.place(CATALOG[2].at(0, 1));
        let puzzle = Puzzle::from_solution(board).unwrap();
        let capped = solve(&puzzle, &SolveConfig::exact().with_max_solutions(1));
        assert_eq!(capped.len(), 1);
    }
}
