//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::prelude::*;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Seed material for reproducible puzzle generation.
///
/// A seed is 32 bytes, written as 64 hex characters (lowercase on output;
/// parsing accepts either case). Together with a
/// [`Difficulty`](crate::Difficulty), a seed fully determines the generated
/// puzzle, which makes generation reproducible across runs: print the seed
/// of a puzzle and it can be regenerated later.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let hex = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: PuzzleSeed = hex.parse()?;
/// assert_eq!(seed.to_string(), hex);
///
/// // Seeds can also be derived from a phrase...
/// let daily = PuzzleSeed::from_phrase("daily 2026-08-25");
/// assert_eq!(daily, PuzzleSeed::from_phrase("daily 2026-08-25"));
///
/// // ...or drawn at random
/// let fresh = PuzzleSeed::random();
/// # let _ = fresh;
/// # Ok::<(), ninefold_generator::SeedParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// The input does not contain exactly 64 characters.
    #[display("seed must be 64 hex characters, got {count}")]
    BadLength {
        /// Number of characters found.
        count: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex character {ch:?} in seed")]
    BadHexDigit {
        /// The offending character.
        ch: char,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed, which is handy for
    /// shareable puzzles ("daily 2026-08-25") without distributing raw hex.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Builds the deterministic RNG driving one generation run.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 64 {
            return Err(SeedParseError::BadLength { count });
        }
        let mut bytes = [0; 32];
        for (i, ch) in s.chars().enumerate() {
            let value = ch.to_digit(16).ok_or(SeedParseError::BadHexDigit { ch })?;
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            if i % 2 == 0 {
                bytes[i / 2] = value << 4;
            } else {
                bytes[i / 2] |= value;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_display_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let lower: PuzzleSeed = HEX.parse().unwrap();
        let upper: PuzzleSeed = HEX.to_uppercase().parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("abcd".parse::<PuzzleSeed>(), Err(SeedParseError::BadLength { count: 4 }));
        assert_eq!(
            format!("{HEX}0").parse::<PuzzleSeed>(),
            Err(SeedParseError::BadLength { count: 65 })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(bad.parse::<PuzzleSeed>(), Err(SeedParseError::BadHexDigit { ch: 'g' }));
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        let a = PuzzleSeed::from_phrase("daily 2026-08-25");
        let b = PuzzleSeed::from_phrase("daily 2026-08-25");
        let c = PuzzleSeed::from_phrase("daily 2026-08-26");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_bytes_round_trip() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        assert_eq!(seed.as_bytes(), &[7; 32]);
        let reparsed: PuzzleSeed = seed.to_string().parse().unwrap();
        assert_eq!(reparsed, seed);
    }

    #[test]
    fn test_debug_shows_hex() {
        let seed = PuzzleSeed::from_bytes([0; 32]);
        assert_eq!(format!("{seed:?}"), format!("PuzzleSeed({})", "0".repeat(64)));
    }
}
