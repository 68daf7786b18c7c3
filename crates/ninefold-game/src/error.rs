//! Game session errors.

use derive_more::{Display, Error};

/// Error returned when a board mutation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is part of the puzzle and cannot be changed.
    #[display("given cells cannot be modified")]
    CannotModifyGivenCell,
}
