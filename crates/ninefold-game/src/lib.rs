//! Play-session tracking for ninefold puzzles.
//!
//! This crate turns a generated puzzle into an interactive session: given
//! cells stay fixed, player entries can be set and cleared, and the board
//! can be checked against the solution at any time. A pause-aware clock
//! and a score function cover the timing side.
//!
//! # Examples
//!
//! ```
//! use std::time::Instant;
//!
//! use ninefold_game::{Game, GameClock, score};
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//!
//! let generated = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let mut game = Game::new(generated);
//! let clock = GameClock::start(Instant::now());
//!
//! let report = game.check();
//! assert!(report.is_clean());
//! assert_eq!(report.missing(), 30);
//!
//! let points = score(clock.elapsed(Instant::now()), game.mistakes());
//! assert!(points <= 1000);
//! ```

pub mod cell_state;
pub mod error;
pub mod game;
pub mod score;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{CheckReport, Game},
    score::{BASE_SCORE, GameClock, MISTAKE_PENALTY, score},
};
