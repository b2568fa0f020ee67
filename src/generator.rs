//! This module contains the logic for generating random captcha puzzles.
//!
//! Generation proceeds in three steps: the three diagonal blocks of an empty
//! grid are seeded with independent random permutations, the seeded grid is
//! completed into a full solution by backtracking search, and a configurable
//! number of holes is cut into a copy of the solution. The result is wrapped
//! in a [PuzzleSession] which mediates all further interaction.

use crate::SudokuGrid;
use crate::constraint;
use crate::error::{SudokuError, SudokuResult};
use crate::session::PuzzleSession;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly produces captcha puzzles, that is, fully solved
/// Sudoku grids together with a working copy from which some cells have been
/// removed. It uses a random number generator to decide the content. For
/// most cases, sensible defaults are provided by [Generator::new_default].
///
/// The generator owns its random number generator exclusively; no ambient or
/// global random state is involved. Providing a seeded generator therefore
/// makes the entire output deterministic, which is a useful affordance for
/// tests.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle(rng: &mut impl Rng,
        values: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut vec: Vec<usize> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Fills the three diagonal blocks of the given grid, with origins at
    /// (0, 0), (3, 3), and (6, 6), each with an independent random
    /// permutation of the digits 1 to 9. No legality check is required:
    /// diagonal blocks share no row or column with each other, so any
    /// intra-block permutation is automatically safe. Consequently, this
    /// operation cannot fail.
    ///
    /// The given grid is expected to be empty; diagonal-block cells which
    /// already hold a digit are overwritten.
    fn fill_diagonal_blocks(&mut self, grid: &mut SudokuGrid) {
        for block in 0..SudokuGrid::BLOCK_SIZE {
            let origin = block * SudokuGrid::BLOCK_SIZE;
            let digits = shuffle(&mut self.rng, 1..=SudokuGrid::SIZE);

            for (i, number) in digits.into_iter().enumerate() {
                let column = origin + i % SudokuGrid::BLOCK_SIZE;
                let row = origin + i / SudokuGrid::BLOCK_SIZE;
                grid.set_cell(column, row, number).unwrap();
            }
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SudokuGrid::SIZE {
            return true;
        }

        let next_column = (column + 1) % SudokuGrid::SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SudokuGrid::SIZE) {
            if constraint::is_safe(grid, column, row, number) {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Completes the given grid with random digits such that every row,
    /// column, and block contains no duplicates, keeping all digits already
    /// present. Cells are visited in row-major order and the candidates for
    /// each empty cell are tried in a freshly shuffled order, so repeated
    /// calls produce different solutions rather than the same canonical one.
    /// Recursion depth is bounded by the 81 cells of the grid.
    ///
    /// If no error is returned, the grid is a valid solution as defined by
    /// [constraint::is_valid_solution]. Otherwise, it remains unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the digits already present in
    /// the grid admit no completion. A grid seeded only in its diagonal
    /// blocks is always completable, so for the grids produced by
    /// [Generator::generate] this error is unreachable and would indicate a
    /// logic defect.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Cuts `holes` distinct cells out of the working grid, marking each one
    /// in the editable mask. Cells are drawn uniformly at random; a draw
    /// that hits an already-cleared cell (recognizable by its empty working
    /// copy) is rejected and repeated. With hole counts close to 81 this
    /// rejection sampling degrades, which is acceptable because observed
    /// usage keeps the count small.
    fn cut_holes(&mut self, current: &mut SudokuGrid,
            editable: &mut [bool; SudokuGrid::CELLS], holes: usize) {
        for _ in 0..holes {
            loop {
                let column = self.rng.gen_range(0..SudokuGrid::SIZE);
                let row = self.rng.gen_range(0..SudokuGrid::SIZE);

                if current.get_cell(column, row).unwrap().is_some() {
                    editable[crate::index(column, row)] = true;
                    current.clear_cell(column, row).unwrap();
                    break;
                }
            }
        }
    }

    /// Generates a new random captcha puzzle with the given number of
    /// holes, wrapped in a [PuzzleSession]. The session's solution grid is a
    /// valid, fully occupied Sudoku grid, its working grid equals the
    /// solution with exactly `holes` cells cleared, and precisely those
    /// cells are marked editable.
    ///
    /// No guarantee is made that the resulting puzzle has a *unique*
    /// completion; the session only ever compares against the stored
    /// solution.
    ///
    /// # Arguments
    ///
    /// * `holes`: The number of cells to remove from the solved grid. Must
    /// be in the range `[1, 81]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidHoleCount` If `holes` is outside the specified
    /// range.
    /// * `SudokuError::UnsatisfiableGrid` Propagated from [Generator::fill];
    /// unreachable in practice (see there).
    pub fn generate(&mut self, holes: usize) -> SudokuResult<PuzzleSession> {
        if holes == 0 || holes > SudokuGrid::CELLS {
            return Err(SudokuError::InvalidHoleCount);
        }

        let mut grid = SudokuGrid::new();
        self.fill_diagonal_blocks(&mut grid);
        self.fill(&mut grid)?;

        let solution = grid.clone();
        let mut editable = [false; SudokuGrid::CELLS];
        self.cut_holes(&mut grid, &mut editable, holes);

        Ok(PuzzleSession::new(solution, grid, editable))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn count_differences(a: &SudokuGrid, b: &SudokuGrid) -> usize {
        a.cells().iter()
            .zip(b.cells().iter())
            .filter(|(a_cell, b_cell)| a_cell != b_cell)
            .count()
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = rand::thread_rng();
        let mut result = shuffle(&mut rng, 1..=9);
        result.sort_unstable();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], result);
    }

    #[test]
    fn filled_grid_is_valid_solution() {
        let mut generator = Generator::new_default();

        for _ in 0..3 {
            let mut grid = SudokuGrid::new();
            generator.fill_diagonal_blocks(&mut grid);
            assert_eq!(27, grid.count_clues());
            generator.fill(&mut grid).unwrap();
            assert!(constraint::is_valid_solution(&grid));
        }
    }

    #[test]
    fn filled_grid_keeps_digits() {
        let code = format!("123456789{}", ".".repeat(72));
        let mut grid = SudokuGrid::parse(&code).unwrap();
        let mut generator = Generator::new_default();
        generator.fill(&mut grid).unwrap();

        assert!(constraint::is_valid_solution(&grid));

        for column in 0..SudokuGrid::SIZE {
            assert_eq!(Some(column + 1), grid.get_cell(column, 0).unwrap());
        }
    }

    #[test]
    fn unsatisfiable_grid_is_not_changed() {
        // (0, 0) would have to be a 9, which the column forbids.
        let code = format!(".123456789{}", ".".repeat(71));
        let mut grid = SudokuGrid::parse(&code).unwrap();
        let grid_before = grid.clone();
        let mut generator = Generator::new_default();
        let result = generator.fill(&mut grid);

        assert_eq!(Err(SudokuError::UnsatisfiableGrid), result);
        assert_eq!(grid_before, grid);
    }

    #[test]
    fn generated_session_has_exact_hole_count() {
        let mut generator = Generator::new_default();

        for &holes in &[1, 10, 81] {
            let session = generator.generate(holes).unwrap();

            assert!(constraint::is_valid_solution(session.solution()));
            assert_eq!(holes, session.hole_count());
            assert_eq!(holes,
                count_differences(session.solution(), session.current()));
            assert_eq!(SudokuGrid::CELLS - holes,
                session.current().count_clues());
        }
    }

    #[test]
    fn hole_cells_are_editable_and_empty() {
        let mut generator = Generator::new_default();
        let session = generator.generate(10).unwrap();

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                let editable = session.is_editable(column, row).unwrap();
                let cell = session.current().get_cell(column, row).unwrap();

                if editable {
                    assert_eq!(None, cell);
                }
                else {
                    assert_eq!(
                        session.solution().get_cell(column, row).unwrap(),
                        cell);
                }
            }
        }
    }

    #[test]
    fn all_holes_empties_the_working_grid() {
        let mut generator = Generator::new_default();
        let session = generator.generate(81).unwrap();

        assert!(session.current().is_empty());
        assert_eq!(81, session.hole_count());
    }

    #[test]
    fn invalid_hole_count_rejected() {
        let mut generator = Generator::new_default();

        assert!(matches!(generator.generate(0),
            Err(SudokuError::InvalidHoleCount)));
        assert!(matches!(generator.generate(82),
            Err(SudokuError::InvalidHoleCount)));
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut first_generator =
            Generator::new(ChaCha8Rng::seed_from_u64(42));
        let mut second_generator =
            Generator::new(ChaCha8Rng::seed_from_u64(42));
        let first = first_generator.generate(5).unwrap();
        let second = second_generator.generate(5).unwrap();

        assert_eq!(first.solution(), second.solution());
        assert_eq!(first.current(), second.current());

        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                assert_eq!(first.is_editable(column, row),
                    second.is_editable(column, row));
            }
        }
    }
}
