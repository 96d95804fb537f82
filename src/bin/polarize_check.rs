//! Checks a puzzle file: validates it, confirms the reference solution
//! reproduces the target, reports solution uniqueness and difficulty
//! features as JSON.
//!
//! Usage: `polarize-check <puzzle.json>`. Log level follows `RUST_LOG`
//! (default `info`).

use std::env;
use std::fs;

use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use polarize::{has_unique_solution, load_puzzle, puzzle_features, PuzzleFeatures, SolveConfig};

#[derive(Serialize)]
struct Report {
    n: usize,
    solution_matches_target: bool,
    unique_solution: bool,
    unique_solution_with_fewer_pieces: bool,
    features: PuzzleFeatures,
}

fn main() {
    let filter = env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: polarize-check <puzzle.json>");
        std::process::exit(2);
    };

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("polarize-check: read {path}: {err}");
            std::process::exit(2);
        }
    };

    let puzzle = match load_puzzle(&json) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("polarize-check: {path}: {err}");
            std::process::exit(1);
        }
    };

    let report = Report {
        n: puzzle.n(),
        solution_matches_target: puzzle.is_solved_by(puzzle.solution()),
        unique_solution: has_unique_solution(&puzzle, &SolveConfig::exact()),
        unique_solution_with_fewer_pieces: has_unique_solution(&puzzle, &SolveConfig::fewer_pieces()),
        features: puzzle_features(&puzzle),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("polarize-check: serialize report: {err}");
            std::process::exit(1);
        }
    }

    if !report.solution_matches_target {
        std::process::exit(1);
    }
}
