//! This module contains the play session, which owns the single active
//! puzzle, and the verification of a user's answer.
//!
//! A [Session] is created with a generator and the puzzle parameters. It
//! generates its first puzzle immediately and replaces it wholesale on every
//! [Session::new_game]. User edits go through the session and are rejected on
//! fixed cells, the engine can auto-complete the current state with
//! [Session::solve_current], and [Session::check] produces a per-cell
//! [CellVerdict] for feedback rendering.
//!
//! Verification deliberately is *not* a rule validator: the original clues
//! are completed by the deterministic solver and the user's grid is compared
//! cell by cell against that one reference. A user entry which is part of a
//! different valid solution of an ambiguous puzzle is still reported as
//! incorrect.
//!
//! ```
//! use sudoku_classic::generator::Generator;
//! use sudoku_classic::session::{CellVerdict, Session};
//!
//! let mut session = Session::new(Generator::new_default(), 2, 8).unwrap();
//! assert_eq!(8, session.puzzle().grid().count_clues());
//!
//! // Let the engine fill in the rest, then check the answer.
//! assert!(session.solve_current());
//! let verdicts = session.check().unwrap();
//! assert!(verdicts.iter().flatten().all(|&v| v == CellVerdict::Correct));
//! ```

use crate::{DEFAULT_BLOCK_SIZE, DEFAULT_CELLS_TO_REMOVE, Puzzle, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::Generator;
use crate::solver::BacktrackingSolver;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The verdict for a single cell when checking a user's answer against the
/// reference solution.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CellVerdict {

    /// The cell contains the same number as the reference solution.
    Correct,

    /// The cell is empty or contains a number different from the reference
    /// solution.
    Incorrect
}

/// Checks a user's answer against the reference solution of a puzzle given by
/// its clues. The clues are completed by the given deterministic solver and
/// the user's grid is compared against that completion cell by cell. The
/// verdicts are returned in a row-major grid of the same dimensions.
///
/// Since the comparison is a pure function of the two grids, checking the
/// same pair twice always yields the same verdicts.
///
/// # Arguments
///
/// * `clues`: The original puzzle grid, containing only the fixed cells.
/// * `user`: The user's current grid. Cells that are empty or deviate from
/// the reference completion are reported as [CellVerdict::Incorrect].
/// * `solver`: The solver used to complete the clues. Must be deterministic
/// for repeated checks of one puzzle to agree, which
/// [BacktrackingSolver::solve] is.
///
/// # Errors
///
/// * `SudokuError::InvalidDimensions` If `clues` and `user` have different
/// block sizes.
/// * `SudokuError::UnsolvableGrid` If the solver found no completion of the
/// clues within its step bound, so there is no reference to compare against.
pub fn check_against_solution(clues: &SudokuGrid, user: &SudokuGrid,
        solver: &BacktrackingSolver) -> SudokuResult<Vec<Vec<CellVerdict>>> {
    if clues.block_size() != user.block_size() {
        return Err(SudokuError::InvalidDimensions);
    }

    let mut reference = clues.clone();

    if !solver.solve(&mut reference) {
        return Err(SudokuError::UnsolvableGrid);
    }

    let size = reference.size();
    let mut verdicts = Vec::with_capacity(size);

    for row in 0..size {
        let mut row_verdicts = Vec::with_capacity(size);

        for column in 0..size {
            let expected = reference.get_cell(row, column).unwrap();
            let actual = user.get_cell(row, column).unwrap();

            if actual == expected {
                row_verdicts.push(CellVerdict::Correct);
            }
            else {
                row_verdicts.push(CellVerdict::Incorrect);
            }
        }

        verdicts.push(row_verdicts);
    }

    Ok(verdicts)
}

/// Indicates whether a verdict grid returned by [check_against_solution]
/// contains no incorrect cells, i.e. the user's answer matches the reference
/// solution completely.
pub fn all_correct(verdicts: &[Vec<CellVerdict>]) -> bool {
    verdicts.iter()
        .flatten()
        .all(|&verdict| verdict == CellVerdict::Correct)
}

/// A play session holding the single active [Puzzle]. The puzzle is created
/// by the session's generator at construction and replaced wholesale by every
/// call to [Session::new_game]; there is never more than one active puzzle.
///
/// All user edits go through [Session::enter] and [Session::erase], which
/// reject fixed cells, so the clues of the active puzzle are immutable for
/// its lifetime.
pub struct Session<R: Rng> {
    generator: Generator<R>,
    solver: BacktrackingSolver,
    block_size: usize,
    cells_to_remove: usize,
    puzzle: Puzzle
}

impl Session<ThreadRng> {

    /// Creates a new session for ordinary 9x9 Sudoku, that is, with
    /// [DEFAULT_BLOCK_SIZE], [DEFAULT_CELLS_TO_REMOVE], and a generator
    /// drawing from a [ThreadRng]. The first puzzle is generated immediately.
    ///
    /// # Errors
    ///
    /// If the initial generation fails. See [Generator::generate].
    pub fn new_default() -> SudokuResult<Session<ThreadRng>> {
        Session::new(Generator::new_default(), DEFAULT_BLOCK_SIZE,
            DEFAULT_CELLS_TO_REMOVE)
    }
}

impl<R: Rng> Session<R> {

    /// Creates a new session which takes ownership of the given generator
    /// and uses the given puzzle parameters for the initial puzzle as well as
    /// all subsequent games. The first puzzle is generated immediately.
    ///
    /// # Arguments
    ///
    /// * `generator`: The generator used for this session's puzzles.
    /// * `block_size`: The side length of one square sub-block of the grids
    /// to play on. Must be greater than 0.
    /// * `cells_to_remove`: The number of cells cleared from each generated
    /// grid. Must be at most `block_size⁴`.
    ///
    /// # Errors
    ///
    /// If the initial generation fails. See [Generator::generate].
    pub fn new(mut generator: Generator<R>, block_size: usize,
            cells_to_remove: usize) -> SudokuResult<Session<R>> {
        let puzzle = generator.generate(block_size, cells_to_remove)?;

        Ok(Session {
            generator,
            solver: BacktrackingSolver::new(),
            block_size,
            cells_to_remove,
            puzzle
        })
    }

    /// Gets a reference to the active puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Replaces the active puzzle with a freshly generated one, discarding
    /// all user entries. The parameters given at session creation are reused.
    ///
    /// # Errors
    ///
    /// If the generation fails. See [Generator::generate]. In that case, the
    /// previous puzzle stays active.
    pub fn new_game(&mut self) -> SudokuResult<()> {
        self.puzzle =
            self.generator.generate(self.block_size, self.cells_to_remove)?;
        Ok(())
    }

    /// Enters the given number into the editable cell at the specified
    /// position, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than or equal to the grid size.
    /// * `SudokuError::FixedCell` If the specified cell is fixed.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, size]`.
    pub fn enter(&mut self, row: usize, column: usize, number: usize)
            -> SudokuResult<()> {
        self.puzzle.set_cell(row, column, number)
    }

    /// Clears the editable cell at the specified position.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than or equal to the grid size.
    /// * `SudokuError::FixedCell` If the specified cell is fixed.
    pub fn erase(&mut self, row: usize, column: usize) -> SudokuResult<()> {
        self.puzzle.clear_cell(row, column)
    }

    /// Completes the active puzzle in place by running the deterministic
    /// solver on its current state, user entries included. Returns whether a
    /// completion was found; if the user's entries make the grid unsolvable,
    /// `false` is returned and the grid is left as it was.
    pub fn solve_current(&mut self) -> bool {
        self.solver.solve(self.puzzle.grid_mut())
    }

    /// Checks the user's current entries against the reference solution,
    /// that is, the completion of the original clues found by the
    /// deterministic solver. See [check_against_solution] for details on the
    /// comparison; user entries made since puzzle creation do not influence
    /// the reference.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsolvableGrid` If no completion of the clues was
    /// found within the solver's step bound.
    pub fn check(&self) -> SudokuResult<Vec<Vec<CellVerdict>>> {
        check_against_solution(&self.puzzle.clues(), self.puzzle.grid(),
            &self.solver)
    }
}
