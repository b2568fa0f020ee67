//! This module contains the interactive surface of a captcha puzzle.
//!
//! A [PuzzleSession] pairs a solved grid with a working copy and an
//! editable-cell mask. Callers render the working copy, feed user-entered
//! lines of the form `row column digit` into [PuzzleSession::apply_input],
//! and query [PuzzleSession::is_solved_correctly] once the user signals they
//! are done. All user-facing coordinates are one-based, while the accessor
//! methods of this crate use zero-based indices.

use crate::SudokuGrid;
use crate::error::{InputError, SudokuResult};

/// An in-progress captcha puzzle. Sessions are created by
/// [Generator::generate](crate::generator::Generator::generate) and hold
/// three pieces of state: the solution grid, the working grid presented to
/// the user, and a mask of the cells the user is allowed to write.
///
/// Cells outside the mask are protected. Write attempts on them are rejected
/// without changing any state, so the clues cut into the puzzle at
/// generation time can never be altered. Within the mask, any digit from 1
/// to 9 is accepted, including digits that conflict with the puzzle's rows,
/// columns, or blocks; errors of that kind only surface through
/// [PuzzleSession::is_solved_correctly].
pub struct PuzzleSession {
    solution: SudokuGrid,
    current: SudokuGrid,
    editable: [bool; SudokuGrid::CELLS]
}

impl PuzzleSession {

    /// Creates a new session from its raw parts. No consistency between the
    /// arguments is enforced; constructing sessions whose working grid does
    /// not derive from the solution is permitted, which is mostly useful for
    /// testing.
    ///
    /// # Arguments
    ///
    /// * `solution`: The fully solved grid which the working grid is
    /// compared against.
    /// * `current`: The working grid presented to the user.
    /// * `editable`: A row-major mask of the cells the user may write.
    pub fn new(solution: SudokuGrid, current: SudokuGrid,
            editable: [bool; SudokuGrid::CELLS]) -> PuzzleSession {
        PuzzleSession {
            solution,
            current,
            editable
        }
    }

    /// Gets the fully solved grid underlying this puzzle.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Gets the current working grid, including any digits the user has
    /// entered so far.
    pub fn current(&self) -> &SudokuGrid {
        &self.current
    }

    /// Indicates whether the cell at the given zero-based position may be
    /// written by the user.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `column` or `row` is not less than 9.
    pub fn is_editable(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        self.current.get_cell(column, row)?;
        Ok(self.editable[crate::index(column, row)])
    }

    /// Gets the number of editable cells in this session. For freshly
    /// generated sessions this equals the hole count passed to the
    /// generator.
    pub fn hole_count(&self) -> usize {
        self.editable.iter().filter(|&&e| e).count()
    }

    /// Renders the current working grid as a bordered text board suitable
    /// for terminal display. Rendering reads the state without modifying it,
    /// so repeated calls yield identical output.
    pub fn render(&self) -> String {
        format!("{}", self.current)
    }

    /// Applies one line of user input to the working grid. The line must
    /// consist of exactly three whitespace-separated integer tokens
    /// `row column digit`, each in the range `[1, 9]`, with `row` and
    /// `column` one-based from the top-left corner.
    ///
    /// Validation proceeds in order: tokenization and integer parsing
    /// first, then the range check on all three values, then the
    /// protected-cell check. If any step fails, the grid is left untouched.
    /// Otherwise, the digit is written unconditionally; it replaces any
    /// previous user entry in that cell and is stored even if it conflicts
    /// with digits elsewhere on the board.
    ///
    /// # Errors
    ///
    /// * `InputError::Malformed` If the line does not contain exactly three
    /// tokens, or a token is not an integer.
    /// * `InputError::OutOfRange` If a value lies outside `[1, 9]`. This
    /// includes zero and negative numbers.
    /// * `InputError::ProtectedCell` If the addressed cell is not editable.
    pub fn apply_input(&mut self, input: &str) -> Result<(), InputError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();

        if tokens.len() != 3 {
            return Err(InputError::Malformed);
        }

        let row: i64 = tokens[0].parse()?;
        let column: i64 = tokens[1].parse()?;
        let digit: i64 = tokens[2].parse()?;

        let in_range = |value: i64| value >= 1 && value <= 9;

        if !in_range(row) || !in_range(column) || !in_range(digit) {
            return Err(InputError::OutOfRange);
        }

        let column = column as usize - 1;
        let row = row as usize - 1;

        if !self.editable[crate::index(column, row)] {
            return Err(InputError::ProtectedCell);
        }

        // Cannot fail: bounds and digit range were checked above.
        self.current.set_cell(column, row, digit as usize).unwrap();
        Ok(())
    }

    /// Indicates whether the working grid matches the solution in every
    /// cell. Any remaining empty cell or deviating digit yields `false`.
    /// Only equality with the stored solution counts; an alternative valid
    /// completion of the same clues is not recognized.
    pub fn is_solved_correctly(&self) -> bool {
        self.current == self.solution
    }
}

/// A parsed line of user interaction. Lines either signal that the user
/// considers the puzzle complete or carry a cell entry to be applied to the
/// session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command<'a> {

    /// The user requests verification of their solution. Recognized from
    /// the word `ready` in any letter case, surrounded by optional
    /// whitespace.
    Ready,

    /// Any other line, to be handed to [PuzzleSession::apply_input].
    Entry(&'a str)
}

impl<'a> Command<'a> {

    /// Parses one line of user interaction. Never fails; lines that are not
    /// the ready keyword are returned verbatim as entries.
    pub fn parse(line: &'a str) -> Command<'a> {
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("ready") {
            Command::Ready
        }
        else {
            Command::Entry(line)
        }
    }
}
