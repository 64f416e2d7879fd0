//! Gravity clock - decides when the next gravity tick is due
//!
//! The loop feeds wall-clock deltas into [`GravityClock::advance`]; the clock
//! never sleeps or reads time itself, so tests can drive it deterministically.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval: Duration,
    elapsed: Duration,
}

impl GravityClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Add `delta` and report whether a gravity tick is due.
    ///
    /// At most one tick fires per call. After firing the clock restarts from
    /// zero, so a stalled loop does not replay a burst of missed ticks.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            return true;
        }
        false
    }

    /// Time left before the next tick (zero when already due)
    pub fn until_due(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }
}
