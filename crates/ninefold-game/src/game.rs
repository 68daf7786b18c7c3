//! Play-session state and answer checking.

use ninefold_core::{Digit, Grid, Position};
use ninefold_generator::GeneratedPuzzle;

use crate::{cell_state::CellState, error::GameError};

/// A running play session for one generated puzzle.
///
/// The session keeps the puzzle's given cells fixed, records player entries,
/// and retains the solution grid for answer checking. Mistakes are counted
/// per call to [`check`](Self::check), not per wrong cell.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
/// use ninefold_game::Game;
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let generated = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let solution = generated.solution.clone();
/// let mut game = Game::new(generated);
///
/// for pos in Position::ALL {
///     if game.cell(pos).is_empty() {
///         let digit = solution.get(pos).expect("solution is complete");
///         game.set_digit(pos, digit)?;
///     }
/// }
/// assert!(game.is_solved());
/// # Ok::<(), ninefold_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Grid,
    mistakes: u32,
}

impl Game {
    /// Starts a new session from a generated puzzle.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle { puzzle, solution, .. } = generated;

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                cells[pos.cell_index()] = CellState::Given(digit);
            }
        }

        Self {
            cells,
            solution,
            mistakes: 0,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.cell_index()]
    }

    /// Returns the solution the session checks against.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns how many checks have found at least one incorrect digit.
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Enters `digit` at `pos`, overwriting any previous entry.
    ///
    /// Entries are not validated against the solution or the row, column,
    /// and box rules; use [`check`](Self::check) for that.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is part of
    /// the puzzle.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.cell_index()];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Filled(digit);
        Ok(())
    }

    /// Removes the player's entry at `pos`. Clearing an already empty cell
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is part of
    /// the puzzle.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.cell_index()];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = CellState::Empty;
        Ok(())
    }

    /// Checks every entered digit against the solution.
    ///
    /// Empty cells are reported as missing, not as mistakes. A check that
    /// finds at least one incorrect digit increments the mistake counter by
    /// one, no matter how many cells are wrong; checking the same wrong
    /// board again counts again.
    pub fn check(&mut self) -> CheckReport {
        let mut incorrect = Vec::new();
        let mut missing = 0;
        for pos in Position::ALL {
            match self.cells[pos.cell_index()].as_digit() {
                Some(digit) => {
                    if self.solution.get(pos) != Some(digit) {
                        incorrect.push(pos);
                    }
                }
                None => missing += 1,
            }
        }

        if !incorrect.is_empty() {
            self.mistakes += 1;
        }
        CheckReport { incorrect, missing }
    }

    /// Returns `true` once every cell matches the solution.
    ///
    /// The board is compared against the generated solution cell by cell.
    /// Puzzles are not guaranteed to have a unique solution, so a complete
    /// board that solves the puzzle some other way is not recognized here.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.cells[pos.cell_index()].as_digit() == self.solution.get(pos))
    }

    /// Returns the digits currently on the board as a plain grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cells[pos.cell_index()].as_digit());
        }
        grid
    }
}

/// Outcome of one answer check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    incorrect: Vec<Position>,
    missing: usize,
}

impl CheckReport {
    /// Positions whose entered digit disagrees with the solution, in
    /// row-major order.
    #[must_use]
    pub fn incorrect(&self) -> &[Position] {
        &self.incorrect
    }

    /// Number of cells still empty.
    #[must_use]
    pub const fn missing(&self) -> usize {
        self.missing
    }

    /// Returns `true` if no entered digit disagrees with the solution.
    /// Empty cells do not count against this.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.incorrect.is_empty()
    }

    /// Returns `true` if the board is complete and fully correct.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_clean() && self.missing == 0
    }
}

#[cfg(test)]
mod tests {
    use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

    use super::*;

    const SOLUTION: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    /// A session over a hand-built puzzle: the top row and the center cell
    /// are empty, everything else is given.
    fn test_game() -> Game {
        let solution: Grid = SOLUTION.parse().expect("valid solution string");
        let mut puzzle = solution.clone();
        for x in 0..9 {
            puzzle.set(Position::new(x, 0), None);
        }
        puzzle.set(Position::new(4, 4), None);

        Game::new(GeneratedPuzzle {
            puzzle,
            solution,
            difficulty: Difficulty::Easy,
            seed: PuzzleSeed::from_phrase("ninefold-game tests"),
        })
    }

    fn digit(value: u8) -> Digit {
        Digit::from_value(value)
    }

    #[test]
    fn test_new_game_marks_givens() {
        let game = test_game();
        for pos in Position::ALL {
            if pos.y() == 0 || pos == Position::new(4, 4) {
                assert_eq!(game.cell(pos), CellState::Empty);
            } else {
                let expected = game.solution().get(pos).expect("solution is complete");
                assert_eq!(game.cell(pos), CellState::Given(expected));
            }
        }
        assert_eq!(game.mistakes(), 0);
        assert_eq!(game.to_grid().filled_count(), 71);
    }

    #[test]
    fn test_set_and_clear_entries() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        assert_eq!(game.cell(pos), CellState::Empty);

        game.set_digit(pos, digit(8)).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(digit(8)));

        // Overwriting an entry is allowed.
        game.set_digit(pos, digit(3)).unwrap();
        assert_eq!(game.cell(pos), CellState::Filled(digit(3)));

        game.clear_cell(pos).unwrap();
        assert_eq!(game.cell(pos), CellState::Empty);

        // Clearing an empty cell is a no-op.
        game.clear_cell(pos).unwrap();
        assert_eq!(game.cell(pos), CellState::Empty);
    }

    #[test]
    fn test_given_cells_cannot_be_modified() {
        let mut game = test_game();
        let given = Position::new(0, 1);

        assert_eq!(game.set_digit(given, digit(1)), Err(GameError::CannotModifyGivenCell));
        assert_eq!(game.clear_cell(given), Err(GameError::CannotModifyGivenCell));
        assert_eq!(game.cell(given), CellState::Given(digit(4)));
    }

    #[test]
    fn test_check_on_fresh_board() {
        let mut game = test_game();
        let report = game.check();

        assert!(report.incorrect().is_empty());
        assert!(report.is_clean());
        assert!(!report.is_solved());
        assert_eq!(report.missing(), 10);
        assert_eq!(game.mistakes(), 0);
    }

    #[test]
    fn test_check_counts_one_mistake_per_check() {
        let mut game = test_game();
        game.set_digit(Position::new(0, 0), digit(5)).unwrap();
        game.set_digit(Position::new(1, 0), digit(9)).unwrap();

        let report = game.check();
        assert_eq!(report.incorrect(), [Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(report.missing(), 8);
        assert!(!report.is_clean());
        assert_eq!(game.mistakes(), 1);

        // The same wrong board counts again on the next check.
        let report = game.check();
        assert_eq!(report.incorrect().len(), 2);
        assert_eq!(game.mistakes(), 2);

        // Corrected entries stop the counter.
        game.set_digit(Position::new(0, 0), digit(1)).unwrap();
        game.set_digit(Position::new(1, 0), digit(2)).unwrap();
        let report = game.check();
        assert!(report.is_clean());
        assert!(!report.is_solved());
        assert_eq!(report.missing(), 8);
        assert_eq!(game.mistakes(), 2);
    }

    #[test]
    fn test_completing_the_board_solves_the_game() {
        let mut game = test_game();
        let solution = game.solution().clone();
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let expected = solution.get(pos).expect("solution is complete");
                game.set_digit(pos, expected).unwrap();
            }
        }

        assert!(game.is_solved());
        let report = game.check();
        assert!(report.is_solved());
        assert_eq!(report.missing(), 0);
        assert_eq!(game.mistakes(), 0);
        assert_eq!(game.to_grid(), solution);
    }

    #[test]
    fn test_wrong_completion_is_not_solved() {
        let mut game = test_game();
        let solution = game.solution().clone();
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let expected = solution.get(pos).expect("solution is complete");
                game.set_digit(pos, expected).unwrap();
            }
        }
        game.set_digit(Position::new(0, 0), digit(5)).unwrap();

        assert!(!game.is_solved());
        let report = game.check();
        assert_eq!(report.incorrect(), [Position::new(0, 0)]);
        assert_eq!(report.missing(), 0);
        assert!(!report.is_solved());
    }

    #[test]
    fn test_to_grid_mirrors_entries() {
        let mut game = test_game();
        let mut expected = game.to_grid();

        game.set_digit(Position::new(0, 0), digit(5)).unwrap();
        expected.set(Position::new(0, 0), Some(digit(5)));
        assert_eq!(game.to_grid(), expected);

        game.clear_cell(Position::new(0, 0)).unwrap();
        expected.set(Position::new(0, 0), None);
        assert_eq!(game.to_grid(), expected);
    }

    #[test]
    fn test_play_generated_puzzle() {
        let seed = PuzzleSeed::from_phrase("ninefold-game integration");
        let generated = PuzzleGenerator::new().generate_with_seed(Difficulty::Hard, seed);
        let solution = generated.solution.clone();
        let mut game = Game::new(generated);
        assert_eq!(game.to_grid().filled_count(), 31);

        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let expected = solution.get(pos).expect("solution is complete");
                game.set_digit(pos, expected).unwrap();
            }
        }

        assert!(game.is_solved());
        assert!(game.check().is_solved());
        assert_eq!(game.mistakes(), 0);
    }
}
