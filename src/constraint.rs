//! This module contains the legality predicates for the classic Sudoku
//! rules: no duplicate digits in any row, column, or 3x3 block.
//!
//! The central function is [is_safe], which decides whether a digit may be
//! placed into a cell without violating any of the three rules. It is the
//! conjunction of [check_row], [check_column], and [check_block], which are
//! also exposed individually. All predicates are pure: they never mutate the
//! grid, allocate no memory, and read at most 27 cells.
//!
//! Note that these predicates only argue about the digits *currently* in the
//! grid. A placement that is safe may still be absent from every completion
//! of the grid; deciding that is the business of the backtracking search in
//! the [generator](crate::generator) module.

use crate::SudokuGrid;

/// Indicates whether placing `number` into the cell at the given position
/// would leave its row free of duplicates. That is, `false` is returned if
/// and only if `number` is already present in another cell of the same row.
/// The checked cell itself is ignored, so a cell already containing `number`
/// does not conflict with itself.
///
/// # Arguments
///
/// * `grid`: The grid to check against.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The number whose placement to check.
pub fn check_row(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    for other_column in 0..SudokuGrid::SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

/// Indicates whether placing `number` into the cell at the given position
/// would leave its column free of duplicates. The checked cell itself is
/// ignored. See [check_row] for the argument contract.
pub fn check_column(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_row in 0..SudokuGrid::SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

/// Indicates whether placing `number` into the cell at the given position
/// would leave its 3x3 block free of duplicates. The block containing the
/// cell has its origin at `(column - column % 3, row - row % 3)`. The
/// checked cell itself is ignored. See [check_row] for the argument
/// contract.
pub fn check_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let block_column = column - column % SudokuGrid::BLOCK_SIZE;
    let block_row = row - row % SudokuGrid::BLOCK_SIZE;

    for other_row in block_row..(block_row + SudokuGrid::BLOCK_SIZE) {
        for other_column in
                block_column..(block_column + SudokuGrid::BLOCK_SIZE) {
            if (other_column != column || other_row != row) &&
                    grid.has_number(other_column, other_row, number)
                        .unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether placing `number` into the cell at the given position
/// violates none of the three classic Sudoku rules, i.e. `number` is absent
/// from the rest of the cell's row, the rest of its column, and the rest of
/// its 3x3 block. See [check_row] for the argument contract.
pub fn is_safe(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    check_row(grid, column, row, number) &&
        check_column(grid, column, row, number) &&
        check_block(grid, column, row, number)
}

fn all_digits<I>(cells: I) -> bool
where
    I: Iterator<Item = Option<usize>>
{
    let mut seen = [false; SudokuGrid::SIZE + 1];

    for cell in cells {
        match cell {
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

/// Indicates whether the given grid is a solved Sudoku, that is, every cell
/// is occupied and each of the 9 rows, 9 columns, and 9 blocks is a
/// permutation of the digits 1 to 9.
pub fn is_valid_solution(grid: &SudokuGrid) -> bool {
    for row in 0..SudokuGrid::SIZE {
        let cells = (0..SudokuGrid::SIZE)
            .map(|column| grid.get_cell(column, row).unwrap());

        if !all_digits(cells) {
            return false;
        }
    }

    for column in 0..SudokuGrid::SIZE {
        let cells = (0..SudokuGrid::SIZE)
            .map(|row| grid.get_cell(column, row).unwrap());

        if !all_digits(cells) {
            return false;
        }
    }

    for block in 0..SudokuGrid::SIZE {
        let block_column =
            (block % SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;
        let block_row =
            (block / SudokuGrid::BLOCK_SIZE) * SudokuGrid::BLOCK_SIZE;
        let cells = (0..SudokuGrid::SIZE)
            .map(|i| {
                let column = block_column + i % SudokuGrid::BLOCK_SIZE;
                let row = block_row + i / SudokuGrid::BLOCK_SIZE;
                grid.get_cell(column, row).unwrap()
            });

        if !all_digits(cells) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLVED: &str = "\
        123456789\
        456789123\
        789123456\
        231564897\
        564897231\
        897231564\
        312645978\
        645978312\
        978312645";

    fn partial_grid() -> SudokuGrid {
        // 5 at (0, 0), 3 at (4, 0), 7 at (1, 4), 2 at (2, 2)
        let code = format!("5...3....{}..2......{}.7.......{}",
            ".".repeat(9), ".".repeat(9), ".".repeat(36));
        SudokuGrid::parse(&code).unwrap()
    }

    #[test]
    fn row_conflict_detected() {
        let grid = partial_grid();

        assert!(!check_row(&grid, 8, 0, 5));
        assert!(!check_row(&grid, 1, 0, 3));
        assert!(check_row(&grid, 8, 0, 4));
        assert!(check_row(&grid, 8, 1, 5));
    }

    #[test]
    fn column_conflict_detected() {
        let grid = partial_grid();

        assert!(!check_column(&grid, 0, 8, 5));
        assert!(check_column(&grid, 0, 8, 3));
        assert!(check_column(&grid, 1, 8, 5));
    }

    #[test]
    fn block_conflict_detected() {
        let grid = partial_grid();

        // (2, 2) holds a 2, so no other cell of the top-left block may.
        assert!(!check_block(&grid, 0, 1, 2));
        assert!(!check_block(&grid, 1, 2, 5));
        assert!(check_block(&grid, 0, 1, 9));
        assert!(check_block(&grid, 3, 1, 2));
    }

    #[test]
    fn checked_cell_does_not_conflict_with_itself() {
        let grid = partial_grid();

        assert!(check_row(&grid, 0, 0, 5));
        assert!(check_column(&grid, 0, 0, 5));
        assert!(check_block(&grid, 0, 0, 5));
        assert!(is_safe(&grid, 0, 0, 5));
    }

    #[test]
    fn is_safe_requires_all_three_rules() {
        let grid = partial_grid();

        assert!(!is_safe(&grid, 8, 0, 5));
        assert!(!is_safe(&grid, 0, 8, 5));
        assert!(!is_safe(&grid, 1, 1, 2));
        assert!(is_safe(&grid, 8, 8, 5));
    }

    #[test]
    fn valid_solution_accepted() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();
        assert!(is_valid_solution(&grid));
    }

    #[test]
    fn incomplete_grid_is_no_solution() {
        let mut grid = SudokuGrid::parse(SOLVED).unwrap();
        grid.clear_cell(4, 4).unwrap();
        assert!(!is_valid_solution(&grid));
    }

    #[test]
    fn duplicate_in_unit_is_no_solution() {
        let mut grid = SudokuGrid::parse(SOLVED).unwrap();

        // Overwriting one cell necessarily duplicates a digit in its row.
        let other = grid.get_cell(1, 0).unwrap().unwrap();
        grid.set_cell(0, 0, other).unwrap();
        assert!(!is_valid_solution(&grid));
    }

    #[test]
    fn empty_grid_is_no_solution() {
        assert!(!is_valid_solution(&SudokuGrid::new()));
    }
}
