//! Session timing and scoring.

use std::time::{Duration, Instant};

/// Score awarded before any deductions.
pub const BASE_SCORE: u32 = 1000;

/// Points deducted per mistake.
pub const MISTAKE_PENALTY: u32 = 50;

/// Computes the final score for a session.
///
/// One point is deducted per elapsed second of play and
/// [`MISTAKE_PENALTY`] points per mistake. The score never goes below
/// zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use ninefold_game::score;
///
/// assert_eq!(score(Duration::from_secs(0), 0), 1000);
/// assert_eq!(score(Duration::from_secs(120), 2), 780);
/// assert_eq!(score(Duration::from_secs(3600), 10), 0);
/// ```
#[must_use]
pub fn score(elapsed: Duration, mistakes: u32) -> u32 {
    let seconds = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
    BASE_SCORE
        .saturating_sub(seconds)
        .saturating_sub(mistakes.saturating_mul(MISTAKE_PENALTY))
}

/// A pause-aware session clock.
///
/// Every method takes the current instant as an argument, so the caller
/// owns the time source and the arithmetic stays testable without
/// sleeping. While paused, [`elapsed`](Self::elapsed) is frozen at the
/// pause instant.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
///
/// use ninefold_game::GameClock;
///
/// let now = Instant::now();
/// let mut clock = GameClock::start(now);
/// clock.pause(now);
/// assert!(clock.is_paused());
/// clock.resume(now);
/// assert!(!clock.is_paused());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    started_at: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl GameClock {
    /// Starts a clock running at `now`.
    #[must_use]
    pub const fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    /// Returns `true` while the clock is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Pauses the clock at `now`. Pausing an already paused clock has no
    /// effect.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resumes the clock at `now`, adding the paused interval to the
    /// excluded total. Resuming a running clock has no effect.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.duration_since(paused_at);
        }
    }

    /// Returns the play time elapsed at `now`, excluding paused intervals.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let end = self.paused_at.unwrap_or(now);
        end.duration_since(self.started_at)
            .saturating_sub(self.paused_total)
    }
}
