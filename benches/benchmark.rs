use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_classic::{DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE, SudokuGrid};
use sudoku_classic::generator::Generator;
use sudoku_classic::solver::BacktrackingSolver;

// Explanation of benchmark classes:
//
// solve: The deterministic backtracking solver on a fixed classic puzzle and
//        on an empty grid (the worst case for the search depth).
// generate: Full puzzle generation, i.e. a shuffled fill followed by random
//           cell removal.

// World Puzzle Federation Sudoku GP 2020 Round 8, Puzzle 2.
const CLASSIC_PUZZLE: &str = "3;\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

fn benchmark_solve_classic(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
    let solver = BacktrackingSolver::new();

    c.bench_function("solve classic 9x9", |b| b.iter(|| {
        let mut grid = puzzle.clone();
        assert!(solver.solve(&mut grid));
    }));
}

fn benchmark_solve_empty(c: &mut Criterion) {
    let empty = SudokuGrid::new(DEFAULT_BLOCK_SIZE).unwrap();
    let solver = BacktrackingSolver::new();

    c.bench_function("solve empty 9x9", |b| b.iter(|| {
        let mut grid = empty.clone();
        assert!(solver.solve(&mut grid));
    }));
}

fn benchmark_generate(c: &mut Criterion) {
    let mut generator = Generator::new_default();

    c.bench_function("generate 9x9 puzzle", |b| b.iter(|| {
        generator
            .generate(DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE)
            .unwrap()
    }));
}

criterion_group!(all,
    benchmark_solve_classic,
    benchmark_solve_empty,
    benchmark_generate
);

criterion_main!(all);
