//! Puzzle generation: backtracking fill plus difficulty-based cell removal.

use ninefold_core::{Digit, Grid, Position};
use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid: the solution with cells removed.
    pub puzzle: Grid,
    /// The complete solution the puzzle was derived from.
    pub solution: Grid,
    /// The difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates sudoku puzzles.
///
/// Generation runs in two phases. The fill phase builds a complete valid
/// solution by recursive backtracking over the cells in row-major order,
/// trying the nine digits in uniformly shuffled order at each cell. The
/// removal phase then clears uniformly chosen cells from a copy of the
/// solution until the difficulty's removal count is reached.
///
/// Removal is naive: the generator does not check that the resulting puzzle
/// has a unique solution. The returned solution is one valid completion,
/// not necessarily the only one.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Medium);
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle.puzzle.filled_count(), 41);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates a puzzle at `difficulty` from a freshly drawn random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`], so any
    /// puzzle can be regenerated later with
    /// [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `difficulty` and `seed`.
    ///
    /// The same difficulty and seed always produce the same puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
    ///
    /// let generator = PuzzleGenerator::new();
    /// let seed = PuzzleSeed::from_phrase("daily 2026-08-25");
    ///
    /// let first = generator.generate_with_seed(Difficulty::Hard, seed);
    /// let second = generator.generate_with_seed(Difficulty::Hard, seed);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut solution = Grid::new();
        let filled = fill_from(&mut solution, 0, &mut rng);
        assert!(filled, "Fill of an empty grid should always succeed");
        debug_assert!(solution.is_solved());

        // Removal mutates a copy, never the solution.
        let mut puzzle = solution.clone();
        remove_cells(&mut puzzle, difficulty.removal_count(), &mut rng);

        log::debug!(
            "Generated {difficulty} puzzle with {} givens (seed {seed})",
            puzzle.filled_count()
        );

        GeneratedPuzzle {
            puzzle,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Fills `grid` from the row-major cell index `cell` onward, backtracking on
/// dead ends. Returns `true` once every cell from `cell` to the end holds a
/// digit.
fn fill_from(grid: &mut Grid, cell: usize, rng: &mut Pcg64) -> bool {
    if cell == 81 {
        return true;
    }
    let pos = Position::ALL[cell];

    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if grid.permits(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, cell + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Clears `count` filled cells, chosen uniformly at random with retry on
/// already-empty cells.
fn remove_cells(grid: &mut Grid, count: u8, rng: &mut Pcg64) {
    let mut remaining = count;
    while remaining > 0 {
        let y = rng.random_range(0..9);
        let x = rng.random_range(0..9);
        let pos = Position::new(x, y);
        if grid.get(pos).is_some() {
            grid.set(pos, None);
            remaining -= 1;
        }
    }
}
