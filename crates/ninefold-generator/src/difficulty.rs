//! Difficulty levels and their removal counts.

use std::fmt;

/// Puzzle difficulty, expressed as the number of cells removed from a
/// complete solution.
///
/// # Examples
///
/// ```
/// use ninefold_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.removal_count(), 30);
/// assert_eq!(Difficulty::Hard.given_count(), 31);
///
/// // Name lookup ignores case and never fails
/// assert_eq!(Difficulty::from_name("MEDIUM"), Difficulty::Medium);
/// assert_eq!(Difficulty::from_name("extreme"), Difficulty::Easy);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 30 cells removed, 51 givens.
    #[default]
    Easy,
    /// 40 cells removed, 41 givens.
    Medium,
    /// 50 cells removed, 31 givens.
    Hard,
}

/// Cells removed per difficulty, indexed by discriminant.
const REMOVAL_COUNTS: [u8; 3] = [30, 40, 50];

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Looks up a difficulty by name, ignoring ASCII case.
    ///
    /// Unrecognized names fall back to [`Difficulty::Easy`] rather than
    /// failing.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|difficulty| name.eq_ignore_ascii_case(difficulty.name()))
            .unwrap_or_default()
    }

    /// Returns the lowercase name of this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Returns how many cells are removed from a complete solution at this
    /// difficulty.
    #[must_use]
    pub const fn removal_count(self) -> u8 {
        REMOVAL_COUNTS[self as usize]
    }

    /// Returns how many cells remain filled in a freshly generated puzzle at
    /// this difficulty.
    #[must_use]
    pub const fn given_count(self) -> u8 {
        81 - self.removal_count()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
