//! Sudoku puzzle generation.
//!
//! The generator builds a complete valid solution by randomized backtracking
//! and derives a playable puzzle from it by removing cells; the number of
//! removed cells is determined by the [`Difficulty`]. Generation is
//! deterministic per [`PuzzleSeed`], so puzzles can be recorded and
//! regenerated.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let generated = generator.generate(Difficulty::Hard);
//!
//! assert!(generated.solution.is_solved());
//! assert_eq!(generated.puzzle.filled_count(), 31);
//!
//! // Every puzzle cell is either empty or agrees with the solution.
//! use ninefold_core::Position;
//! for pos in Position::ALL {
//!     let cell = generated.puzzle.get(pos);
//!     assert!(cell.is_none() || cell == generated.solution.get(pos));
//! }
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
};
