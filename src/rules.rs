//! This module contains the constraint checks which define the rules of
//! classic Sudoku: no duplicate number in any row, column, or block.
//!
//! The checks come in two granularities. [placement_valid] decides whether a
//! single number could be placed into a specific cell, which is what the
//! backtracking search asks at every branch point. [grid_solved] validates an
//! entire grid, which is mostly useful for tests and for asserting the result
//! of a solver run.

use crate::SudokuGrid;

/// Indicates whether the given `number` could be placed into the cell at
/// `(row, column)` without conflicting with any number already present in the
/// same row, the same column, or the same block.
///
/// The checked cell is assumed to be empty. Its current content, if any,
/// participates in the scan like that of any other cell, so asking about a
/// number which is already in the checked cell itself yields `false`.
///
/// This function is a pure predicate and never modifies the grid. Numbers
/// outside the range `[1, size]` can never be placed and always yield
/// `false`.
///
/// # Arguments
///
/// * `grid`: The grid into which the placement is proposed.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, size[`.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, size[`.
/// * `number`: The number whose placement is proposed.
pub fn placement_valid(grid: &SudokuGrid, row: usize, column: usize,
        number: usize) -> bool {
    let size = grid.size();

    if number == 0 || number > size {
        return false;
    }

    for i in 0..size {
        if grid.has_number(row, i, number).unwrap() ||
                grid.has_number(i, column, number).unwrap() {
            return false;
        }
    }

    let block_size = grid.block_size();
    let block_row = row / block_size * block_size;
    let block_column = column / block_size * block_size;

    for r in block_row..(block_row + block_size) {
        for c in block_column..(block_column + block_size) {
            if grid.has_number(r, c, number).unwrap() {
                return false;
            }
        }
    }

    true
}

fn cells_complete(grid: &SudokuGrid,
        cells: impl Iterator<Item = (usize, usize)>) -> bool {
    let size = grid.size();
    let mut seen = vec![false; size + 1];

    for (row, column) in cells {
        match grid.get_cell(row, column).unwrap() {
            Some(number) => {
                if seen[number] {
                    return false;
                }

                seen[number] = true;
            },
            None => return false
        }
    }

    true
}

/// Indicates whether the given grid is completely solved, that is, every cell
/// is filled and every row, every column, and every block contains each
/// number from 1 to the grid size exactly once.
pub fn grid_solved(grid: &SudokuGrid) -> bool {
    let size = grid.size();
    let block_size = grid.block_size();

    for i in 0..size {
        let row_complete =
            cells_complete(grid, (0..size).map(move |c| (i, c)));
        let column_complete =
            cells_complete(grid, (0..size).map(move |r| (r, i)));
        let block_row = i / block_size * block_size;
        let block_column = i % block_size * block_size;
        let block_complete = cells_complete(grid,
            (0..size).map(move |j|
                (block_row + j / block_size, block_column + j % block_size)));

        if !row_complete || !column_complete || !block_complete {
            return false;
        }
    }

    true
}
