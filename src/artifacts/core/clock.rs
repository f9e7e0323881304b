//! Clocks used to timestamp commits
//!
//! Every commit records the instant it was created. The instant comes from a
//! [`Clock`] so that tests and pinned CLI runs can replace wall-clock time with
//! a deterministic sequence.
//!
//! - [`SystemClock`]: local wall-clock time
//! - [`SteppingClock`]: starts at a fixed instant and advances by a fixed step
//!   on every read

use anyhow::Context;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::sync::Mutex;

/// Environment variable pinning the start instant of the session clock
pub const DATE_ENV: &str = "MINIGIT_DATE";

/// Environment variable overriding the step of a pinned session clock, in milliseconds
pub const CLOCK_STEP_ENV: &str = "MINIGIT_CLOCK_STEP_MS";

/// Step used by a pinned clock when none is configured
pub const DEFAULT_STEP_MS: i64 = 1000;

/// Source of commit timestamps
///
/// Successive reads must never go backwards.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time with the local UTC offset
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Deterministic clock for tests and reproducible runs
///
/// The first read returns `start`; each following read is one `step` later.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<FixedOffset>>,
    step: TimeDelta,
}

impl SteppingClock {
    pub fn new(start: DateTime<FixedOffset>, step: TimeDelta) -> Self {
        SteppingClock {
            next: Mutex::new(start),
            step,
        }
    }

    /// Clock that returns the same instant forever, useful to force timestamp ties
    pub fn frozen(at: DateTime<FixedOffset>) -> Self {
        Self::new(at, TimeDelta::zero())
    }

    /// Parse a start instant the same way `MINIGIT_DATE` is parsed
    ///
    /// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn parse_start(date: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
            .with_context(|| format!("Invalid date: {date}"))
    }

    /// Build a pinned clock from `MINIGIT_DATE` and `MINIGIT_CLOCK_STEP_MS`
    ///
    /// Returns `None` when no date is configured.
    pub fn load_from_env() -> anyhow::Result<Option<Self>> {
        let Ok(date) = std::env::var(DATE_ENV) else {
            return Ok(None);
        };
        let start = Self::parse_start(&date).with_context(|| format!("{DATE_ENV} is invalid"))?;

        let step_ms = match std::env::var(CLOCK_STEP_ENV) {
            Ok(step) => step
                .parse::<i64>()
                .with_context(|| format!("{CLOCK_STEP_ENV} is not a number: {step}"))?,
            Err(_) => DEFAULT_STEP_MS,
        };
        if step_ms < 0 {
            anyhow::bail!("{CLOCK_STEP_ENV} must not be negative: {step_ms}");
        }

        Ok(Some(Self::new(start, TimeDelta::milliseconds(step_ms))))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let mut next = self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = *next;
        *next = now + self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-01-01 12:00:00 +0000")]
    #[case("Sun, 01 Jan 2023 12:00:00 +0000")]
    fn test_parse_start_accepts_supported_formats(#[case] date: &str) {
        let start = SteppingClock::parse_start(date).unwrap();
        assert_eq!(start.timestamp(), 1_672_574_400);
    }

    #[test]
    fn test_parse_start_rejects_garbage() {
        assert!(SteppingClock::parse_start("yesterday-ish").is_err());
    }

    #[test]
    fn test_stepping_clock_advances_by_step() {
        let start = SteppingClock::parse_start("2023-01-01 12:00:00 +0000").unwrap();
        let clock = SteppingClock::new(start, TimeDelta::milliseconds(5));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(5));
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(10));
    }

    #[test]
    fn test_frozen_clock_repeats() {
        let start = SteppingClock::parse_start("2023-01-01 12:00:00 +0000").unwrap();
        let clock = SteppingClock::frozen(start);

        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
