//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur when operating on grids, puzzles, or
/// sessions. Errors which occur while parsing a grid code are covered by
/// [PuzzleParseError](enum.PuzzleParseError.html) instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the block size specified for a created grid is invalid,
    /// that is, zero.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the grid in question. This is the case if either is greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that a cell which was pre-filled by the generator was about
    /// to be overwritten or cleared. Fixed cells are immutable for the
    /// lifetime of a puzzle.
    FixedCell,

    /// Indicates that the number of cells to remove during generation is
    /// larger than the total number of cells in the grid.
    InvalidRemovalCount,

    /// Indicates that the generator repeatedly failed to fill a grid within
    /// the solver's step bound. With the default step bound this is
    /// extremely improbable, but it is reported as an error rather than
    /// accepting a partially filled grid.
    GenerationFailed,

    /// Indicates that no completion of a grid could be found within the step
    /// bound, so no reference solution is available to check against.
    UnsolvableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PuzzleParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: block size
    /// and cells, so if the code does not contain exactly one semicolon, this
    /// error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the block size.
    WrongNumberOfCells,

    /// Indicates that the provided block size is invalid (i.e. zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (block size or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the grid size).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, PuzzleParseError>`.
pub type PuzzleParseResult<V> = Result<V, PuzzleParseError>;

impl From<ParseIntError> for PuzzleParseError {
    fn from(_: ParseIntError) -> Self {
        PuzzleParseError::NumberFormatError
    }
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleParseError::WrongNumberOfParts =>
                write!(f, "expected exactly one ';' in the grid code"),
            PuzzleParseError::WrongNumberOfCells =>
                write!(f, "number of cells does not match the block size"),
            PuzzleParseError::InvalidDimensions =>
                write!(f, "block size must be greater than zero"),
            PuzzleParseError::NumberFormatError =>
                write!(f, "part of the grid code is not a valid number"),
            PuzzleParseError::InvalidNumber =>
                write!(f, "cell content outside the valid number range")
        }
    }
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "block size must be greater than zero"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the valid range for this grid"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            SudokuError::FixedCell =>
                write!(f, "cell is fixed and cannot be edited"),
            SudokuError::InvalidRemovalCount =>
                write!(f, "more cells to remove than the grid contains"),
            SudokuError::GenerationFailed =>
                write!(f, "could not generate a full grid within the step \
                    bound"),
            SudokuError::UnsolvableGrid =>
                write!(f, "no completion found within the step bound")
        }
    }
}
