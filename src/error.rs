//! This module contains the error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and the [generator](crate::generator) module.
/// Errors raised while parsing a grid code are covered separately by
/// [GridParseError], errors raised by player input by [InputError].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either of them is greater than or
    /// equal to 9.
    OutOfBounds,

    /// Indicates that some number is invalid for a grid cell. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the number of holes requested from the generator is
    /// invalid. This is the case if it is 0 or greater than 81, since a
    /// puzzle must have at least one editable cell and cannot have more
    /// holes than the grid has cells.
    InvalidHoleCount,

    /// An error that is raised if the backtracking search fails to complete
    /// a partially filled grid. For grids seeded only in the diagonal blocks
    /// this cannot happen; receiving this error indicates a defect in the
    /// caller, not a recoverable runtime condition.
    UnsatisfiableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [SudokuGrid::parse](crate::SudokuGrid::parse).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code does not contain exactly 81 characters, one
    /// per cell.
    WrongNumberOfCells,

    /// Indicates that the code contains a character which is neither a digit
    /// from 1 to 9 nor one of the two empty-cell markers (`.` and `0`).
    InvalidCharacter
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// An enumeration of the ways in which a line of player input can be
/// rejected by
/// [PuzzleSession::apply_input](crate::session::PuzzleSession::apply_input).
/// All of these are recoverable by design: the session state is unchanged
/// and the caller is expected to reprompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {

    /// Indicates that the input did not consist of exactly three
    /// whitespace-separated integer tokens.
    Malformed,

    /// Indicates that the input was well-formed, but the one-based row or
    /// column was not in the range `[1, 9]`, or the digit was not in the
    /// range `[1, 9]`.
    OutOfRange,

    /// Indicates that the addressed cell is a fixed clue which the player
    /// may not overwrite.
    ProtectedCell
}

impl From<ParseIntError> for InputError {
    fn from(_: ParseIntError) -> Self {
        InputError::Malformed
    }
}
