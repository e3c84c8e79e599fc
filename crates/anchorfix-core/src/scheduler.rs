#![forbid(unsafe_code)]

//! Fire-and-forget correction deadlines.
//!
//! The corrector never sleeps: it records deadlines against a host-advanced
//! monotonic clock, and the host polls with the current time to drain the
//! ones that are due. There is no cancellation — a redundant firing runs an
//! idempotent correction and changes nothing.

use core::time::Duration;

/// A deadline queue over host-driven monotonic time.
///
/// Deadlines are absolute (`now + delay` at scheduling time). Ordering among
/// deadlines due in the same poll is scheduling order, which is all the
/// semantics the corrector needs.
#[derive(Debug, Clone, Default)]
pub struct CorrectionScheduler {
    deadlines: Vec<Duration>,
}

impl CorrectionScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadlines: Vec::new(),
        }
    }

    /// Request one correction `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        let deadline = now.saturating_add(delay);
        tracing::trace!(?now, ?delay, ?deadline, "correction scheduled");
        self.deadlines.push(deadline);
    }

    /// Drain every deadline at or before `now`, returning how many fired.
    pub fn take_due(&mut self, now: Duration) -> usize {
        let before = self.deadlines.len();
        self.deadlines.retain(|deadline| *deadline > now);
        before - self.deadlines.len()
    }

    /// Number of deadlines still pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_fires_before_the_deadline() {
        let mut sched = CorrectionScheduler::new();
        sched.schedule(Duration::ZERO, 10 * MS);
        assert_eq!(sched.take_due(9 * MS), 0);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn fires_at_exactly_the_deadline() {
        let mut sched = CorrectionScheduler::new();
        sched.schedule(Duration::ZERO, 10 * MS);
        assert_eq!(sched.take_due(10 * MS), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn fired_deadlines_do_not_fire_again() {
        let mut sched = CorrectionScheduler::new();
        sched.schedule(Duration::ZERO, MS);
        assert_eq!(sched.take_due(MS), 1);
        assert_eq!(sched.take_due(100 * MS), 0);
    }

    #[test]
    fn multiple_due_deadlines_all_fire_in_one_poll() {
        let mut sched = CorrectionScheduler::new();
        sched.schedule(Duration::ZERO, MS);
        sched.schedule(Duration::ZERO, 2 * MS);
        sched.schedule(Duration::ZERO, 50 * MS);
        assert_eq!(sched.take_due(10 * MS), 2);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn deadlines_are_absolute_not_relative_to_poll_time() {
        let mut sched = CorrectionScheduler::new();
        sched.schedule(5 * MS, 10 * MS);
        assert_eq!(sched.take_due(14 * MS), 0);
        assert_eq!(sched.take_due(15 * MS), 1);
    }
}
