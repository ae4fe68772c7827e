//! Fixed-interval tick timer driven by explicit timestamps.
//!
//! The timer never sleeps or spawns anything; the driver asks it how long to
//! wait and whether a tick is due. Passing `now` in keeps it testable.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    /// Create a stopped timer.
    ///
    /// # Panics
    ///
    /// Panics on a zero interval.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be non-zero");
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start (or restart) ticking; the first tick is due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stop ticking. Returns whether the timer was running.
    pub fn cancel(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Time left until the next tick, or `None` while stopped.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    /// Consume a due tick, scheduling the following one.
    ///
    /// At most one tick fires per call. After a long stall the schedule
    /// restarts from `now` instead of replaying the missed ticks.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }
}
