//! This module contains the logic for generating random Sudoku puzzles.
//!
//! A [Generator] first produces one randomly chosen full solved grid by
//! running the backtracking search with shuffled candidates, then clears a
//! configured number of randomly chosen cells. The result is wrapped in a
//! [Puzzle](crate::Puzzle), whose fixed cells are exactly the cells that
//! survived the removal.
//!
//! There is no guarantee that a generated puzzle has a unique solution.
//! Answer checking copes with that by always comparing against one canonical
//! completion of the clues (see [session](crate::session)).

use crate::{Puzzle, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::solver::BacktrackingSolver;

use rand::Rng;
use rand::rngs::ThreadRng;

/// The number of times a generator retries filling a grid with fresh
/// randomness before it reports [SudokuError::GenerationFailed]. Starting
/// from an empty grid, a fill practically never exhausts the default step
/// bound, so more than one attempt is already an anomaly.
const MAX_FILL_ATTEMPTS: usize = 3;

/// A generator for random Sudoku puzzles. It uses a random number generator
/// both to pick the full solved grid and to decide which cells are removed
/// from it. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R,
    solver: BacktrackingSolver
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] for its random
    /// decisions and a [BacktrackingSolver] with the default step bound.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// and a [BacktrackingSolver] with the default step bound.
    pub fn new(rng: R) -> Generator<R> {
        Generator::with_solver(rng, BacktrackingSolver::new())
    }

    /// Creates a new generator that uses the given random number generator
    /// and the given solver for filling grids. Mostly useful to control the
    /// step bound.
    pub fn with_solver(rng: R, solver: BacktrackingSolver) -> Generator<R> {
        Generator {
            rng,
            solver
        }
    }

    fn fill_full_grid(&mut self, block_size: usize)
            -> SudokuResult<SudokuGrid> {
        for _ in 0..MAX_FILL_ATTEMPTS {
            let mut grid = SudokuGrid::new(block_size)?;

            if self.solver.fill(&mut grid, &mut self.rng) {
                return Ok(grid);
            }
        }

        Err(SudokuError::GenerationFailed)
    }

    /// Generates a new random [Puzzle] with the given parameters. First, a
    /// full solved grid is produced by backtracking with shuffled candidates,
    /// retrying with fresh randomness in the unlikely event that an attempt
    /// exceeds the solver's step bound. Then exactly `cells_to_remove` cells,
    /// chosen uniformly at random, are cleared. All remaining cells become
    /// the fixed cells of the puzzle.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The side length of one square sub-block of the grid.
    /// For an ordinary Sudoku grid, this is
    /// [DEFAULT_BLOCK_SIZE](crate::DEFAULT_BLOCK_SIZE). Must be greater
    /// than 0.
    /// * `cells_to_remove`: The number of cells to clear from the full grid.
    /// For an ordinary Sudoku grid, this is
    /// [DEFAULT_CELLS_TO_REMOVE](crate::DEFAULT_CELLS_TO_REMOVE). Must be at
    /// most the total number of cells, i.e. `block_size⁴`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If `block_size` is invalid (zero).
    /// * `SudokuError::InvalidRemovalCount` If `cells_to_remove` is greater
    /// than the total number of cells.
    /// * `SudokuError::GenerationFailed` If filling the grid failed
    /// repeatedly. With the default step bound, this does not happen in
    /// practice.
    pub fn generate(&mut self, block_size: usize, cells_to_remove: usize)
            -> SudokuResult<Puzzle> {
        if block_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = block_size * block_size;

        if cells_to_remove > size * size {
            return Err(SudokuError::InvalidRemovalCount);
        }

        let mut grid = self.fill_full_grid(block_size)?;
        let mut removed = 0;

        while removed < cells_to_remove {
            let row = self.rng.gen_range(0..size);
            let column = self.rng.gen_range(0..size);

            if grid.get_cell(row, column).unwrap().is_some() {
                grid.clear_cell(row, column).unwrap();
                removed += 1;
            }
        }

        Ok(Puzzle::new(grid))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::{DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE};
    use crate::rules::{grid_solved, placement_valid};

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_puzzle_has_expected_clue_count() {
        let mut generator = Generator::new_default();
        let puzzle = generator
            .generate(DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE)
            .unwrap();

        assert_eq!(41, puzzle.grid().count_clues());
    }

    #[test]
    fn generated_puzzle_solvable_to_valid_grid() {
        let mut generator = Generator::new_default();
        let puzzle = generator
            .generate(DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE)
            .unwrap();
        let mut completion = puzzle.grid().clone();
        let solver = BacktrackingSolver::new();

        assert!(solver.solve(&mut completion));
        assert!(grid_solved(&completion));
    }

    #[test]
    fn generated_clues_self_consistent() {
        let mut generator = Generator::new_default();
        let puzzle = generator
            .generate(DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE)
            .unwrap();
        let grid = puzzle.grid();
        let size = grid.size();

        for row in 0..size {
            for column in 0..size {
                if let Some(number) = grid.get_cell(row, column).unwrap() {
                    let mut without = grid.clone();
                    without.clear_cell(row, column).unwrap();
                    assert!(placement_valid(&without, row, column, number),
                        "Clue at ({}, {}) conflicts with the rest.", row,
                        column);
                }
            }
        }
    }

    #[test]
    fn fixed_cells_are_exactly_the_clues() {
        let mut generator = Generator::new_default();
        let puzzle = generator.generate(2, 8).unwrap();
        let size = puzzle.grid().size();

        for row in 0..size {
            for column in 0..size {
                let has_clue =
                    puzzle.grid().get_cell(row, column).unwrap().is_some();
                assert_eq!(has_clue, puzzle.is_fixed(row, column).unwrap());
            }
        }
    }

    #[test]
    fn generation_reproducible_with_seeded_rng() {
        let rng_1 = ChaCha8Rng::seed_from_u64(23);
        let rng_2 = ChaCha8Rng::seed_from_u64(23);
        let puzzle_1 = Generator::new(rng_1).generate(3, 40).unwrap();
        let puzzle_2 = Generator::new(rng_2).generate(3, 40).unwrap();

        assert_eq!(puzzle_1, puzzle_2);
    }

    #[test]
    fn removing_all_cells_yields_empty_puzzle() {
        let mut generator = Generator::new_default();
        let puzzle = generator.generate(2, 16).unwrap();

        assert!(puzzle.grid().is_empty());
    }

    #[test]
    fn removing_no_cells_yields_full_puzzle() {
        let mut generator = Generator::new_default();
        let puzzle = generator.generate(2, 0).unwrap();

        assert!(puzzle.grid().is_full());
        assert!(grid_solved(puzzle.grid()));
    }

    #[test]
    fn invalid_block_size_rejected() {
        let mut generator = Generator::new_default();

        assert_eq!(Err(SudokuError::InvalidDimensions),
            generator.generate(0, 0));
    }

    #[test]
    fn excessive_removal_count_rejected() {
        let mut generator = Generator::new_default();

        assert_eq!(Err(SudokuError::InvalidRemovalCount),
            generator.generate(2, 17));
    }

    #[test]
    fn exhausted_step_bound_surfaces_as_generation_failure() {
        let rng = ChaCha8Rng::seed_from_u64(5);
        let solver = BacktrackingSolver::with_max_steps(0);
        let mut generator = Generator::with_solver(rng, solver);

        assert_eq!(Err(SudokuError::GenerationFailed),
            generator.generate(3, 40));
    }
}
