//! Per-cell state during play.

use ninefold_core::Digit;

/// The state of a single cell in a running game.
///
/// Cells carried over from the puzzle are [`Given`](Self::Given) and stay
/// fixed for the whole session. Everything else starts
/// [`Empty`](Self::Empty) and toggles between empty and
/// [`Filled`](Self::Filled) as the player works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A digit that is part of the puzzle and cannot be changed.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit yet.
    Empty,
}

impl CellState {
    /// Returns the digit shown in the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Returns `true` if the cell is part of the puzzle.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns `true` if the cell holds a player-entered digit.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// Returns `true` if the cell holds no digit.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}
