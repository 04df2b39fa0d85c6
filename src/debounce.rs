// SPDX-License-Identifier: MPL-2.0
//! Debounced event handling.
//!
//! A [`Debouncer`] coalesces bursts of events (window resizes, rapid scroll
//! updates) into a single firing once the burst has been quiet for the
//! configured delay. Time is injected, so behavior is fully deterministic.

use std::time::{Duration, Instant};

/// Coalesces repeated triggers into one deferred firing.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet-period delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records an event, pushing the pending deadline forward.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns whether a firing is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires if the quiet period has elapsed.
    ///
    /// Returns `true` at most once per burst; afterwards the debouncer is
    /// idle until the next [`Debouncer::trigger`].
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn fires_after_quiet_period() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(now);
        assert!(debouncer.is_pending());
        assert!(!debouncer.poll(now + DELAY - Duration::from_millis(1)));
        assert!(debouncer.poll(now + DELAY));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn retrigger_pushes_the_deadline_forward() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(now);
        debouncer.trigger(now + Duration::from_millis(80));

        // The original deadline passes without firing.
        assert!(!debouncer.poll(now + DELAY));
        // The refreshed deadline fires.
        assert!(debouncer.poll(now + Duration::from_millis(180)));
    }

    #[test]
    fn fires_at_most_once_per_burst() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(now);
        assert!(debouncer.poll(now + DELAY));
        assert!(!debouncer.poll(now + DELAY * 2));
    }

    #[test]
    fn cancel_drops_the_pending_firing() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.trigger(now);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(now + DELAY * 2));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.poll(now + DELAY * 10));
    }
}
