//! The 9x9 sudoku grid.
//!
//! [`Grid`] stores 81 cells of `Option<Digit>` addressed by [`Position`],
//! and carries the placement-safety predicate ([`Grid::permits`]) shared by
//! puzzle generation and validity checking.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position};

/// A 9x9 sudoku grid.
///
/// Cells are `Option<Digit>`: `None` is an empty cell. The textual form
/// used by [`FromStr`] and [`Display`](fmt::Display) is 81 cells in
/// row-major order, where `1`-`9` are digits and `.`, `_`, or `0` denote an
/// empty cell; whitespace is ignored when parsing, so grids may be written
/// one row per line.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let grid: Grid = format!("123{}", ".".repeat(78)).parse()?;
///
/// assert_eq!(grid.get(Position::new(1, 0)), Some(Digit::D2));
/// assert_eq!(grid.filled_count(), 3);
///
/// // 1 already appears in row 0, so it is not safe anywhere in that row
/// assert!(!grid.permits(Position::new(4, 0), Digit::D1));
/// // ...but nothing constrains it in the middle of the board
/// assert!(grid.permits(Position::new(4, 4), Digit::D1));
/// # Ok::<(), ninefold_core::GridParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The input does not contain exactly 81 cells.
    #[display("grid must contain 81 cells, got {count}")]
    BadCellCount {
        /// Number of non-whitespace cells found.
        count: usize,
    },
    /// The input contains a character that is not a digit or empty-cell
    /// marker.
    #[display("invalid cell character {ch:?}")]
    BadCell {
        /// The offending character.
        ch: char,
    },
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets the cell at `pos` to `digit` (`None` clears the cell).
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if placing `digit` at `pos` violates no sudoku
    /// constraint: the digit must not already appear in the cell's row,
    /// column, or containing 3x3 box.
    ///
    /// The cell itself participates in the scan, so a digit is never
    /// permitted on top of an existing occurrence of itself.
    #[must_use]
    pub fn permits(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            if self.get(Position::new(i, pos.y())) == Some(digit)
                || self.get(Position::new(pos.x(), i)) == Some(digit)
            {
                return false;
            }
        }

        let x0 = pos.x() / 3 * 3;
        let y0 = pos.y() / 3 * 3;
        for y in y0..y0 + 3 {
            for x in x0..x0 + 3 {
                if self.get(Position::new(x, y)) == Some(digit) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns `true` if the grid is completely filled and every row,
    /// column, and 3x3 box contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.digits_in(row_positions(i)) == DigitSet::FULL
                && self.digits_in(column_positions(i)) == DigitSet::FULL
                && self.digits_in(box_positions(i)) == DigitSet::FULL
        })
    }

    fn digits_in(&self, positions: impl Iterator<Item = Position>) -> DigitSet {
        positions.filter_map(|pos| self.get(pos)).collect()
    }
}

fn row_positions(y: u8) -> impl Iterator<Item = Position> {
    (0..9).map(move |x| Position::new(x, y))
}

fn column_positions(x: u8) -> impl Iterator<Item = Position> {
    (0..9).map(move |y| Position::new(x, y))
}

fn box_positions(index: u8) -> impl Iterator<Item = Position> {
    let x0 = index % 3 * 3;
    let y0 = index / 3 * 3;
    (0..9).map(move |i| Position::new(x0 + i % 3, y0 + i / 3))
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '.' | '_' | '0' => None,
                _ => {
                    let value = ch.to_digit(10).and_then(|value| u8::try_from(value).ok());
                    Some(
                        value
                            .and_then(Digit::try_from_value)
                            .ok_or(GridParseError::BadCell { ch })?,
                    )
                }
            };
            if count < 81 {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::BadCellCount { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}
