//! This module contains the backtracking search which both solves and fills
//! Sudoku grids.
//!
//! The central type is [BacktrackingSolver]. Its two operations share one
//! depth-first search and differ only in the order in which candidate numbers
//! are tried: [BacktrackingSolver::solve] tries them in ascending order,
//! making it fully deterministic, while [BacktrackingSolver::fill] shuffles
//! the candidates at every branch point and is used by the generator to
//! produce a random full grid.

use crate::{DEFAULT_MAX_STEPS, SudokuGrid};
use crate::rules;

use rand::Rng;
use rand::seq::SliceRandom;

/// The order in which candidate numbers are tried at a branch point of the
/// search. Implementations rearrange the prepared ascending candidate list in
/// place.
trait CandidateOrder {
    fn arrange(&mut self, candidates: &mut [usize]);
}

/// Keeps candidates in ascending order, yielding a deterministic search.
struct Ascending;

impl CandidateOrder for Ascending {
    fn arrange(&mut self, _: &mut [usize]) { }
}

/// Applies a uniformly random permutation (Fisher-Yates) to the candidates at
/// every branch point.
struct Shuffled<'a, R: Rng>(&'a mut R);

impl<'a, R: Rng> CandidateOrder for Shuffled<'a, R> {
    fn arrange(&mut self, candidates: &mut [usize]) {
        candidates.shuffle(self.0);
    }
}

/// A solver which fills Sudoku grids by recursively testing all valid numbers
/// for the first empty cell in reading order, backtracking whenever it runs
/// into a cell with no valid candidate. The first completion it encounters
/// wins; it makes no attempt to enumerate further solutions or to prove
/// uniqueness.
///
/// Since the worst-case runtime of this search is exponential, every
/// top-level invocation is bounded by a maximum number of steps, where each
/// entered recursion counts as one step. Once the bound is exceeded, the
/// search aborts and reports failure. The step counter is local to each
/// invocation, so a solver instance can be reused for any number of
/// independent grids.
///
/// Failure is always reported as a `false` return value, never as a panic.
/// After a failed search, every cell the search touched has been backtracked
/// to empty, while cells that were filled at entry keep their content. The
/// search only ever fills and clears cells which were empty when it started.
pub struct BacktrackingSolver {
    max_steps: u64
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver with the default step bound,
    /// [DEFAULT_MAX_STEPS](crate::DEFAULT_MAX_STEPS).
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver::with_max_steps(DEFAULT_MAX_STEPS)
    }

    /// Creates a new backtracking solver which aborts any search that takes
    /// more than `max_steps` recursive invocations.
    pub fn with_max_steps(max_steps: u64) -> BacktrackingSolver {
        BacktrackingSolver {
            max_steps
        }
    }

    /// Gets the bound on the number of search steps a single invocation of
    /// this solver may take.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    fn search(&self, grid: &mut SudokuGrid,
            order: &mut impl CandidateOrder, steps: &mut u64) -> bool {
        *steps += 1;

        if *steps > self.max_steps {
            return false;
        }

        let (row, column) = match grid.first_empty_cell() {
            Some(cell) => cell,
            None => return true
        };
        let size = grid.size();
        let mut candidates: Vec<usize> = (1..=size).collect();
        order.arrange(&mut candidates);

        for number in candidates {
            if rules::placement_valid(grid, row, column, number) {
                grid.set_cell(row, column, number).unwrap();

                if self.search(grid, order, steps) {
                    return true;
                }

                grid.clear_cell(row, column).unwrap();
            }
        }

        false
    }

    /// Solves the given grid in place, that is, fills every empty cell such
    /// that the result satisfies the row, column, and block rules with
    /// respect to the numbers already present. Returns `true` if a completion
    /// was found within the step bound. Candidates are tried in ascending
    /// order, so for any given input the same completion is found in the same
    /// number of steps every time.
    ///
    /// Note that numbers present at entry are taken as given and are *not*
    /// validated against each other. If the grid has several completions, an
    /// arbitrary (but deterministic) one is produced.
    ///
    /// On a `false` return, the grid is in the same state as at entry.
    pub fn solve(&self, grid: &mut SudokuGrid) -> bool {
        let mut steps = 0;
        self.search(grid, &mut Ascending, &mut steps)
    }

    /// Fills the given grid in place like [BacktrackingSolver::solve], but
    /// tries the candidates for each cell in a uniformly random order drawn
    /// from `rng`. Starting from an empty grid, this produces a randomly
    /// chosen full solved grid, which is how puzzles are generated.
    ///
    /// Returns `true` if a completion was found within the step bound. On a
    /// `false` return, the grid is in the same state as at entry.
    pub fn fill<R: Rng>(&self, grid: &mut SudokuGrid, rng: &mut R) -> bool {
        let mut steps = 0;
        self.search(grid, &mut Shuffled(rng), &mut steps)
    }
}

impl Default for BacktrackingSolver {
    fn default() -> BacktrackingSolver {
        BacktrackingSolver::new()
    }
}
