// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a Sudoku-based captcha engine. A challenge is posed
//! to the user by generating a random, fully solved 9x9 Sudoku grid and
//! punching a configurable number of holes into it. The user then has to
//! restore the removed digits; whether they managed to do so decides whether
//! they are treated as a human. The crate supports the following key
//! features:
//!
//! * Randomized generation of complete, valid Sudoku grids via diagonal
//! seeding and backtracking search
//! * Carving a puzzle out of a solved grid by removing a configurable number
//! of cells
//! * A session type that renders the board, applies textual player input to
//! editable cells, and verifies the solved state
//!
//! The crate is a pure, synchronous, in-process library. It performs no I/O
//! and contains no logging; the embedding shell owns the console loop and
//! all sinks, sends one line of input per turn, and receives structured
//! results in return.
//!
//! # Generating a challenge
//!
//! Challenges are produced by a [Generator](generator::Generator), which
//! wraps a random number generator from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate. For
//! most cases, sensible defaults are provided by
//! [Generator::new_default](generator::Generator::new_default).
//!
//! ```
//! use sudoku_captcha::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let mut session = generator.generate(5).unwrap();
//!
//! // Five cells were removed and are now editable.
//! assert_eq!(5, session.hole_count());
//! assert!(!session.is_solved_correctly());
//! println!("{}", session.render());
//! ```
//!
//! # Applying input and checking the solution
//!
//! A [PuzzleSession](session::PuzzleSession) accepts one line of input per
//! turn, containing one-based row and column coordinates and a digit. Input
//! which cannot be applied is rejected with an
//! [InputError](error::InputError) and leaves the session unchanged, so the
//! shell can simply reprompt.
//!
//! ```
//! use sudoku_captcha::error::InputError;
//! use sudoku_captcha::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let mut session = generator.generate(1).unwrap();
//!
//! assert_eq!(Err(InputError::Malformed), session.apply_input("not a move"));
//! assert_eq!(Err(InputError::OutOfRange), session.apply_input("1 2 0"));
//! ```
//!
//! To finish a challenge, the shell recognizes the `ready` command using
//! [Command::parse](session::Command::parse) and then consults
//! [PuzzleSession::is_solved_correctly](session::PuzzleSession::is_solved_correctly).
//! The session is discarded afterwards; no state survives across challenges.
//!
//! # Working with grids directly
//!
//! [SudokuGrid] instances can be parsed from compact 81-character codes,
//! which is mostly useful for tests and demonstrations. See
//! [SudokuGrid::parse] for the exact format.
//!
//! ```
//! use sudoku_captcha::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ).unwrap();
//! assert_eq!(Ok(Some(5)), grid.get_cell(0, 0));
//! assert_eq!(Ok(None), grid.get_cell(2, 0));
//! assert_eq!(30, grid.count_clues());
//! ```

pub mod constraint;
pub mod error;
pub mod generator;
pub mod session;

use error::{GridParseError, GridParseResult, SudokuError, SudokuResult};

use std::fmt::{self, Display, Formatter};

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SudokuGrid::SIZE + column
}

/// A 9x9 Sudoku grid, stored as a flat, owned array of 81 cells in
/// left-to-right, top-to-bottom order. Each cell may or may not be occupied
/// by a digit from 1 to 9.
///
/// A grid is *valid* if every row, every column, and every 3x3 block
/// contains no duplicate digits, and *solved* if in addition every cell is
/// occupied, making each of those units a permutation of the digits 1 to 9.
/// Validity is never enforced by this type itself - it is perfectly legal to
/// construct an invalid grid. The [constraint] module contains the
/// predicates that check validity.
///
/// `SudokuGrid` implements `Display`, rendering the fixed board layout that
/// is presented to the player:
///
/// ```text
/// +-------+-------+-------+
/// | 5 3 . | . 7 . | . . . |
/// | 6 . . | 1 9 5 | . . . |
/// | . 9 8 | . . . | . 6 . |
/// +-------+-------+-------+
/// | 8 . . | . 6 . | . . 3 |
/// | 4 . . | 8 . 3 | . . 1 |
/// | 7 . . | . 2 . | . . 6 |
/// +-------+-------+-------+
/// | . 6 . | . . . | 2 8 . |
/// | . . . | 4 1 9 | . . 5 |
/// | . . . | . 8 . | . 7 9 |
/// +-------+-------+-------+
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<usize>; SudokuGrid::CELLS]
}

const BORDER: &str = "+-------+-------+-------+";

fn to_char(cell: Option<usize>) -> char {
    if let Some(number) = cell {
        (b'0' + number as u8) as char
    }
    else {
        '.'
    }
}

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    let mut result = String::new();

    for column in 0..SudokuGrid::SIZE {
        if column % SudokuGrid::BLOCK_SIZE == 0 {
            result.push('|');
            result.push(' ');
        }

        result.push(to_char(grid.cells[index(column, row)]));
        result.push(' ');
    }

    result.push('|');
    result
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SudokuGrid::SIZE {
            if row % SudokuGrid::BLOCK_SIZE == 0 {
                writeln!(f, "{}", BORDER)?;
            }

            writeln!(f, "{}", content_row(self, row))?;
        }

        write!(f, "{}", BORDER)
    }
}

impl SudokuGrid {

    /// The width and height of the grid, in cells.
    pub const SIZE: usize = 9;

    /// The width and height of one of the nine non-overlapping blocks that
    /// partition the grid.
    pub const BLOCK_SIZE: usize = 3;

    /// The total number of cells in the grid.
    pub const CELLS: usize = SudokuGrid::SIZE * SudokuGrid::SIZE;

    /// Creates a new, empty grid in which every cell is unoccupied.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; SudokuGrid::CELLS]
        }
    }

    /// Parses a compact code encoding a grid. The code must consist of
    /// exactly 81 characters, one per cell, in left-to-right, top-to-bottom
    /// order, where each row is completed before the next one is started.
    /// Digits from 1 to 9 denote occupied cells, while `.` and `0` both
    /// denote empty cells.
    ///
    /// As an example, a code starting with `123456789` and continuing with
    /// 72 dots parses to a grid whose first row contains the digits 1 to 9
    /// in order and which is otherwise empty.
    ///
    /// # Errors
    ///
    /// * `GridParseError::WrongNumberOfCells` If the code does not contain
    /// exactly 81 characters.
    /// * `GridParseError::InvalidCharacter` If the code contains a character
    /// other than `1` to `9`, `.`, and `0`.
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let mut count = 0;

        for (i, c) in code.chars().enumerate() {
            if i >= SudokuGrid::CELLS {
                return Err(GridParseError::WrongNumberOfCells);
            }

            grid.cells[i] = match c {
                '.' | '0' => None,
                '1'..='9' => Some(c as usize - '0' as usize),
                _ => return Err(GridParseError::InvalidCharacter)
            };
            count += 1;
        }

        if count != SudokuGrid::CELLS {
            return Err(GridParseError::WrongNumberOfCells);
        }

        Ok(grid)
    }

    fn check_bounds(column: usize, row: usize) -> SudokuResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(())
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        SudokuGrid::check_bounds(column, row)?;
        Ok(self.cells[index(column, row)])
    }

    /// Indicates whether the cell at the specified position contains the
    /// given number. This will return `false` if there is a different number
    /// in that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        SudokuGrid::check_bounds(column, row)?;

        if number == 0 || number > SudokuGrid::SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        SudokuGrid::check_bounds(column, row)?;
        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// occupied cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is occupied by a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is occupied by a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>; SudokuGrid::CELLS] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}
