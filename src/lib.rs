// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements the core of a classic, single-player Sudoku game.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking individual placements against row, column, and block rules
//! * Solving Sudoku using a backtracking algorithm with a step bound
//! * Generating random puzzles by filling a grid and removing a configured
//! number of cells
//! * Managing a play session with fixed and editable cells and checking a
//! user's answer against a reference solution
//!
//! Note that in this introduction we will mostly be using 4x4 Sudoku due to
//! their simpler nature. These are divided in 4 2x2 blocks, each with the
//! digits 1 to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid =
//!     SudokuGrid::parse("2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving grids
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills the first empty
//! cell in reading order with the lowest number that does not conflict with
//! any row, column, or block, and backtracks when it runs into a dead end.
//! Since candidates are tried in ascending order, the result is fully
//! deterministic.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver::BacktrackingSolver;
//!
//! let mut grid = SudokuGrid::new(2).unwrap();
//! let solver = BacktrackingSolver::new();
//!
//! assert!(solver.solve(&mut grid));
//!
//! // The lexicographically first completion of an empty 4x4 grid.
//! let expected =
//!     SudokuGrid::parse("2;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1").unwrap();
//! assert_eq!(expected, grid);
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first produces a random full grid by
//! running the backtracking search with shuffled candidates and then clears a
//! configured number of randomly chosen cells. The cells that remain filled
//! become the fixed cells of the resulting [Puzzle].
//!
//! ```
//! use sudoku_classic::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(2, 8).unwrap();
//!
//! assert_eq!(8, puzzle.grid().count_clues());
//! ```
//!
//! # Play sessions
//!
//! A [Session](session::Session) owns the single active puzzle, accepts user
//! input on editable cells, can auto-solve the current state, and produces a
//! per-cell verdict for the user's answer. See the [session] module for
//! details and examples.

pub mod error;
pub mod generator;
pub mod rules;
pub mod session;
pub mod solver;


use error::{PuzzleParseError, PuzzleParseResult, SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// The block size of an ordinary Sudoku grid, yielding a 9x9 grid of 3x3
/// blocks.
pub const DEFAULT_BLOCK_SIZE: usize = 3;

/// The number of cells the generator clears from a full 9x9 grid to obtain
/// the playable puzzle, leaving 41 clues.
pub const DEFAULT_CELLS_TO_REMOVE: usize = 40;

/// The default bound on the number of search steps a single solver invocation
/// may take before it gives up. Each entered recursion counts as one step.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// A Sudoku grid is a square arrangement of cells which is subdivided into
/// square blocks. The block size determines everything: a grid with block
/// size `b` consists of `b` by `b` blocks, each of which is `b` by `b` cells,
/// so the grid is `b²` by `b²` cells in total and valid cell contents are the
/// numbers 1 to `b²`. For an ordinary Sudoku, the block size is 3:
///
/// ```text
/// 5 3 . | . 7 . | . . .
/// 6 . . | 1 9 5 | . . .
/// . 9 8 | . . . | . 6 .
/// ------+-------+------
/// 8 . . | . 6 . | . . 3
/// 4 . . | 8 . 3 | . . 1
/// 7 . . | . 2 . | . . 6
/// ------+-------+------
/// . 6 . | . . . | 2 8 .
/// . . . | 4 1 9 | . . 5
/// . . . | . 8 . | . 7 9
/// ```
///
/// Each cell may or may not be occupied by a number. Coordinates are given as
/// `(row, column)` pairs, both 0-based, with the origin in the top-left
/// corner.
///
/// `SudokuGrid` implements `Display` in the format shown above, but only
/// grids with a size of less than or equal to 9 can be displayed with digits
/// 1 to 9. Grids of all other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    block_size: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

pub(crate) fn index(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

fn cell_to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size;
        let block_size = self.block_size;

        if size > 9 {
            return Err(Error::default());
        }

        let separator = vec!["-".repeat(2 * block_size - 1); block_size]
            .join("-+-");

        for row in 0..size {
            if row > 0 {
                writeln!(f)?;

                if row % block_size == 0 {
                    writeln!(f, "{}", separator)?;
                }
            }

            for column in 0..size {
                if column > 0 {
                    if column % block_size == 0 {
                        write!(f, " | ")?;
                    }
                    else {
                        write!(f, " ")?;
                    }
                }

                match self.cells[index(row, column, size)] {
                    Some(number) => write!(f, "{}", number)?,
                    None => write!(f, ".")?
                }
            }
        }

        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid with the given block size. The total
    /// width and height of the grid will be the square of `block_size`.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The side length of one square sub-block of the grid,
    /// which is also the number of blocks along each axis. For an ordinary
    /// Sudoku grid, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `block_size` is invalid (zero).
    pub fn new(block_size: usize) -> SudokuResult<SudokuGrid> {
        if block_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = block_size * block_size;
        let cells = vec![None; size * size];

        Ok(SudokuGrid {
            block_size,
            size,
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code has to be of the format
    /// `<block_size>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow for
    /// more intuitive formatting. The number of entries must match the amount
    /// of cells in a grid with the given block size, i.e. it must be
    /// `block_size⁴`.
    ///
    /// As an example, the code `2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// 1 . | 2 .
    /// . 3 | . 4
    /// ----+----
    /// . . | . 3
    /// . 1 | . 2
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `PuzzleParseError` (see that documentation).
    pub fn parse(code: &str) -> PuzzleParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(PuzzleParseError::WrongNumberOfParts);
        }

        let block_size = parts[0].trim().parse::<usize>()?;
        let mut grid = SudokuGrid::new(block_size)
            .map_err(|_| PuzzleParseError::InvalidDimensions)?;
        let size = grid.size();
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != size * size {
            return Err(PuzzleParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > size {
                return Err(PuzzleParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a code and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(3).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(2, 1, 5).unwrap();
    ///
    /// let code = grid.to_grid_code();
    /// let parsed = SudokuGrid::parse(code.as_str()).unwrap();
    /// assert_eq!(grid, parsed);
    /// ```
    pub fn to_grid_code(&self) -> String {
        let mut s = format!("{};", self.block_size);
        let cells = self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the side length of one square sub-block of the grid, which is
    /// also the number of blocks along each axis.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since the grid is a square, this is valid for both axes.
    /// It is always the square of [SudokuGrid::block_size].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size;

        if row >= size || column >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column, size)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given number. This will return `false` if there is a different number
    /// in that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, row: usize, column: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(row, column)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size;

        if row >= size || column >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(row, column, size)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        let size = self.size;

        if row >= size || column >= size {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column, size)] = None;
        Ok(())
    }

    /// Finds the first empty cell in reading order, that is, scanning each
    /// row left to right before moving on to the next one. Returns its
    /// coordinates as a `(row, column)` pair, or `None` if the grid is full.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.cells.iter()
            .position(Option::is_none)
            .map(|i| (i / self.size, i % self.size))
    }

    /// Counts the number of clues given by this grid, that is, the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns the square of
    /// [SudokuGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_none())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Gets a slice of the cells of this grid in reading order, that is,
    /// left-to-right, top-to-bottom, where rows are contiguous.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_grid_code()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = PuzzleParseError;

    fn try_from(code: String) -> PuzzleParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

/// A puzzle is a [SudokuGrid] together with the partition of its cells into
/// fixed and editable ones. A cell is fixed if and only if it was non-empty
/// at the moment the puzzle was created, i.e. directly after the generator
/// finished removing cells. Fixed cells cannot be overwritten or cleared for
/// the lifetime of the puzzle, all other cells are free for the user to edit.
///
/// There is no guarantee that a puzzle has a unique solution. Answer checking
/// therefore compares against one canonical completion of the original clues
/// (see [session::check_against_solution]).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    grid: SudokuGrid,
    fixed: Vec<bool>
}

impl Puzzle {

    /// Creates a new puzzle from the given grid. All cells which are
    /// non-empty in `grid` become fixed, all empty cells remain editable.
    pub fn new(grid: SudokuGrid) -> Puzzle {
        let fixed = grid.cells().iter()
            .map(Option::is_some)
            .collect();

        Puzzle {
            grid,
            fixed
        }
    }

    /// Gets a reference to the grid holding the current state of this puzzle,
    /// including any numbers entered since its creation.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Indicates whether the cell at the specified position is fixed, that
    /// is, was pre-filled at the creation of this puzzle.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than or equal to the grid
    /// size. In that case, `SudokuError::OutOfBounds` is returned.
    pub fn is_fixed(&self, row: usize, column: usize) -> SudokuResult<bool> {
        let size = self.grid.size();

        if row >= size || column >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.fixed[index(row, column, size)])
        }
    }

    /// Sets the content of the editable cell at the specified position to the
    /// given number, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than or equal to the grid size.
    /// * `SudokuError::FixedCell` If the specified cell is fixed.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, size]`.
    pub fn set_cell(&mut self, row: usize, column: usize, number: usize)
            -> SudokuResult<()> {
        if self.is_fixed(row, column)? {
            return Err(SudokuError::FixedCell);
        }

        self.grid.set_cell(row, column, number)
    }

    /// Clears the content of the editable cell at the specified position. If
    /// the cell is already empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than or equal to the grid size.
    /// * `SudokuError::FixedCell` If the specified cell is fixed.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        if self.is_fixed(row, column)? {
            return Err(SudokuError::FixedCell);
        }

        self.grid.clear_cell(row, column)
    }

    /// Reconstructs the grid of original clues of this puzzle, that is, the
    /// grid as it was at creation time: fixed cells keep their number, all
    /// other cells are empty regardless of any entries the user made since.
    pub fn clues(&self) -> SudokuGrid {
        let mut clues = self.grid.clone();
        let size = clues.size();

        for row in 0..size {
            for column in 0..size {
                if !self.fixed[index(row, column, size)] {
                    clues.clear_cell(row, column).unwrap();
                }
            }
        }

        clues
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("2; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(grid) = grid_res {
            assert_eq!(2, grid.block_size());
            assert_eq!(4, grid.size());
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(None, grid.get_cell(0, 1).unwrap());
            assert_eq!(None, grid.get_cell(0, 2).unwrap());
            assert_eq!(Some(2), grid.get_cell(0, 3).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(1, 1).unwrap());
            assert_eq!(None, grid.get_cell(1, 2).unwrap());
            assert_eq!(Some(4), grid.get_cell(1, 3).unwrap());
            assert_eq!(None, grid.get_cell(2, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(2, 1).unwrap());
            assert_eq!(None, grid.get_cell(2, 2).unwrap());
            assert_eq!(None, grid.get_cell(2, 3).unwrap());
            assert_eq!(Some(3), grid.get_cell(3, 0).unwrap());
            assert_eq!(None, grid.get_cell(3, 1).unwrap());
            assert_eq!(None, grid.get_cell(3, 2).unwrap());
            assert_eq!(None, grid.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(PuzzleParseError::WrongNumberOfParts),
            SudokuGrid::parse("2;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(PuzzleParseError::InvalidDimensions),
            SudokuGrid::parse("0;,"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(PuzzleParseError::NumberFormatError),
            SudokuGrid::parse("#;,"));
        assert_eq!(Err(PuzzleParseError::NumberFormatError),
            SudokuGrid::parse("2;a,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(PuzzleParseError::InvalidNumber),
            SudokuGrid::parse("2;,,,4,,,5,,,,,,,,,"));
        assert_eq!(Err(PuzzleParseError::InvalidNumber),
            SudokuGrid::parse("2;0,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(PuzzleParseError::WrongNumberOfCells),
            SudokuGrid::parse("2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(PuzzleParseError::WrongNumberOfCells),
            SudokuGrid::parse("2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn to_grid_code() {
        let mut grid = SudokuGrid::new(2).unwrap();

        assert_eq!("2;,,,,,,,,,,,,,,,", grid.to_grid_code().as_str());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(2, 2, 3).unwrap();
        grid.set_cell(3, 3, 4).unwrap();

        assert_eq!("2;1,,,,,2,,,,,3,,,,,4", grid.to_grid_code().as_str());
    }

    #[test]
    fn invalid_block_size() {
        assert_eq!(Err(SudokuError::InvalidDimensions), SudokuGrid::new(0));
    }

    #[test]
    fn size() {
        let grid1 = SudokuGrid::new(1).unwrap();
        let grid2 = SudokuGrid::new(2).unwrap();
        let grid3 = SudokuGrid::new(3).unwrap();
        assert_eq!(1, grid1.size());
        assert_eq!(4, grid2.size());
        assert_eq!(9, grid3.size());
    }

    #[test]
    fn cell_accessors() {
        let mut grid = SudokuGrid::new(2).unwrap();

        assert_eq!(Ok(()), grid.set_cell(1, 2, 3));
        assert_eq!(Some(3), grid.get_cell(1, 2).unwrap());
        assert!(grid.has_number(1, 2, 3).unwrap());
        assert!(!grid.has_number(1, 2, 4).unwrap());
        assert!(!grid.has_number(2, 1, 3).unwrap());

        assert_eq!(Ok(()), grid.clear_cell(1, 2));
        assert_eq!(None, grid.get_cell(1, 2).unwrap());
    }

    #[test]
    fn cell_accessors_out_of_bounds() {
        let mut grid = SudokuGrid::new(2).unwrap();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(4, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 4, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(4, 4));
    }

    #[test]
    fn set_cell_invalid_number() {
        let mut grid = SudokuGrid::new(2).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 5));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::parse("2;,,,,,,,,,,,,,,,").unwrap();
        let partial = SudokuGrid::parse("2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = SudokuGrid::parse("2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn first_empty_cell_in_reading_order() {
        let grid = SudokuGrid::parse("2;1,2,3,4,3,4,,2,,,,,,,,").unwrap();
        assert_eq!(Some((1, 2)), grid.first_empty_cell());

        let full = SudokuGrid::parse("2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();
        assert_eq!(None, full.first_empty_cell());

        let empty = SudokuGrid::new(2).unwrap();
        assert_eq!(Some((0, 0)), empty.first_empty_cell());
    }

    #[test]
    fn display_format() {
        let grid = SudokuGrid::parse("2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2")
            .unwrap();
        let expected =
            "1 . | 2 .\n\
             . 3 | . 4\n\
             ----+----\n\
             . . | . 3\n\
             . 1 | . 2";
        assert_eq!(expected, format!("{}", grid));
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse("2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2")
            .unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!("\"2;1,,2,,,3,,4,,,,3,,1,,2\"", json);

        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_malformed_code() {
        let result = serde_json::from_str::<SudokuGrid>("\"2;1,2,3\"");
        assert!(result.is_err());
    }

    fn example_puzzle() -> Puzzle {
        Puzzle::new(
            SudokuGrid::parse("2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2").unwrap())
    }

    #[test]
    fn puzzle_partition_matches_clues() {
        let puzzle = example_puzzle();

        assert!(puzzle.is_fixed(0, 0).unwrap());
        assert!(puzzle.is_fixed(1, 1).unwrap());
        assert!(!puzzle.is_fixed(0, 1).unwrap());
        assert!(!puzzle.is_fixed(3, 3).unwrap());
    }

    #[test]
    fn puzzle_rejects_edits_on_fixed_cells() {
        let mut puzzle = example_puzzle();

        assert_eq!(Err(SudokuError::FixedCell), puzzle.set_cell(0, 0, 4));
        assert_eq!(Err(SudokuError::FixedCell), puzzle.clear_cell(1, 1));
        assert_eq!(Some(1), puzzle.grid().get_cell(0, 0).unwrap());
    }

    #[test]
    fn puzzle_accepts_edits_on_editable_cells() {
        let mut puzzle = example_puzzle();

        assert_eq!(Ok(()), puzzle.set_cell(0, 1, 4));
        assert_eq!(Some(4), puzzle.grid().get_cell(0, 1).unwrap());
        assert_eq!(Ok(()), puzzle.clear_cell(0, 1));
        assert_eq!(None, puzzle.grid().get_cell(0, 1).unwrap());
    }

    #[test]
    fn puzzle_clues_ignore_user_entries() {
        let mut puzzle = example_puzzle();
        let original = puzzle.grid().clone();

        puzzle.set_cell(0, 1, 4).unwrap();
        puzzle.set_cell(3, 2, 4).unwrap();

        assert_eq!(original, puzzle.clues());
    }
}
