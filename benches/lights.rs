use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polarize::{lights, load_puzzle, paths_horizontal, solve, Board, SolveConfig, CATALOG};

const PUZZLE: &str = r#"{"n": 4, "lights": [2, 0, 1, 2, 1, 1, 2, 2], "dominoes": [4, 2, 1, 3], "initial_placed_dominoes": [{"domino": 1, "i": 1, "j": 1}, {"domino": 2, "i": 1, "j": 0}, {"domino": 4, "i": 0, "j": 0}, {"domino": 3, "i": 0, "j": 2}], "solution": {"values": [[0, 0, 1, 2], [0, 0, 0, 0], [2, 2, 0, 0], [0, 0, 2, 1]], "placed_dominoes": [{"domino": 1, "i": 2, "j": 0}, {"domino": 2, "i": 2, "j": 3}, {"domino": 3, "i": 0, "j": 2}]}}"#;

fn filled_board() -> Board {
    let mut board = Board::square(4);
    for (idx, (i, j)) in [(0, 0), (2, 0), (0, 1), (2, 1), (0, 2), (2, 2), (0, 3), (2, 3)]
        .into_iter()
        .enumerate()
    {
        board.place(CATALOG[idx % 4].at(i, j));
    }
    board
}

fn bench_lights(c: &mut Criterion) {
    let board = filled_board();
    c.bench_function("board/lights", |b| b.iter(|| lights(black_box(&board))));
    c.bench_function("board/paths_horizontal", |b| {
        b.iter(|| paths_horizontal(black_box(&board)));
    });
}

fn bench_solve(c: &mut Criterion) {
    let puzzle = load_puzzle(PUZZLE).unwrap();
    c.bench_function("solver/exact", |b| {
        b.iter(|| solve(black_box(&puzzle), &SolveConfig::exact()));
    });
    c.bench_function("solver/fewer_pieces", |b| {
        b.iter(|| solve(black_box(&puzzle), &SolveConfig::fewer_pieces()));
    });
}

criterion_group!(benches, bench_lights, bench_solve);
criterion_main!(benches);
