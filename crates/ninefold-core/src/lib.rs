//! Core grid model for the ninefold sudoku engine.
//!
//! This crate provides the grid vocabulary shared by puzzle generation and
//! play-session tracking:
//!
//! - [`Digit`]: type-safe sudoku digits 1-9
//! - [`Position`]: (x, y) cell coordinates on the 9x9 board
//! - [`DigitSet`]: a set of digits backed by a 9-bit mask
//! - [`Grid`]: the board itself, with the placement-safety predicate and a
//!   textual form for tests and tooling
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let grid: Grid = format!("123{}", ".".repeat(78)).parse()?;
//!
//! // 1 already appears in row 0 and in the top-left box
//! assert!(!grid.permits(Position::new(8, 0), Digit::D1));
//! assert!(!grid.permits(Position::new(0, 2), Digit::D1));
//! // Unconstrained elsewhere
//! assert!(grid.permits(Position::new(4, 4), Digit::D1));
//! # Ok::<(), ninefold_core::GridParseError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridParseError},
    position::Position,
};
