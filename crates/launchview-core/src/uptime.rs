//! Elapsed-time decomposition for the uptime readout.

use std::fmt;
use std::time::{Duration, Instant};

/// Hours/minutes/seconds split of an elapsed duration.
///
/// Hours accumulate without wrapping; an uptime counter has no day rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    /// Decompose an elapsed duration.
    #[must_use]
    pub fn from_duration(elapsed: Duration) -> Self {
        let secs = elapsed.as_secs();
        Self {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
            seconds: secs % 60,
        }
    }

    /// Decompose the time between two instants. An earlier `now` counts as
    /// zero elapsed.
    #[must_use]
    pub fn between(start: Instant, now: Instant) -> Self {
        Self::from_duration(now.saturating_duration_since(start))
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_each() {
        let uptime = Uptime::from_duration(Duration::from_millis(3_661_000));
        assert_eq!(uptime.hours, 1);
        assert_eq!(uptime.minutes, 1);
        assert_eq!(uptime.seconds, 1);
    }

    #[test]
    fn zero_duration() {
        let uptime = Uptime::from_duration(Duration::ZERO);
        assert_eq!((uptime.hours, uptime.minutes, uptime.seconds), (0, 0, 0));
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let uptime = Uptime::from_duration(Duration::from_millis(59_999));
        assert_eq!((uptime.hours, uptime.minutes, uptime.seconds), (0, 0, 59));
    }

    #[test]
    fn hours_do_not_wrap_at_24() {
        let uptime = Uptime::from_duration(Duration::from_secs(25 * 3600 + 90));
        assert_eq!(uptime.hours, 25);
        assert_eq!(uptime.minutes, 1);
        assert_eq!(uptime.seconds, 30);
    }

    #[test]
    fn displays_zero_padded() {
        let uptime = Uptime::from_duration(Duration::from_secs(3_661));
        assert_eq!(uptime.to_string(), "01:01:01");
        let long = Uptime::from_duration(Duration::from_secs(100 * 3600));
        assert_eq!(long.to_string(), "100:00:00");
    }

    #[test]
    fn between_saturates_for_reversed_instants() {
        let now = Instant::now();
        let later = now + Duration::from_secs(5);
        let uptime = Uptime::between(later, now);
        assert_eq!((uptime.hours, uptime.minutes, uptime.seconds), (0, 0, 0));
    }
}
