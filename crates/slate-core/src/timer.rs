#![forbid(unsafe_code)]

//! Cancellable one-shot timers driven by explicit time.
//!
//! Components never call ambient timer functions. They receive a
//! [`Scheduler`], ask it for a [`TimerId`], and later get that id handed back
//! by the host when the deadline passes. Cancelling is by id, so a component
//! that forgets a handle cannot be woken by it.
//!
//! [`TimerQueue`] is the host-side implementation. It owns a virtual clock and
//! only moves forward when the host calls [`advance`](TimerQueue::advance),
//! [`advance_to`](TimerQueue::advance_to) or [`poll`](TimerQueue::poll).
//!
//! # Invariants
//!
//! 1. Timers fire in deadline order; equal deadlines fire in scheduling order.
//! 2. A cancelled timer never fires.
//! 3. Time observed through [`Scheduler::now`] never decreases.
//! 4. While firing, `now()` equals the firing timer's deadline, so timers
//!    scheduled from inside a handler are relative to that instant.
//! 5. Timers scheduled from a handler whose deadline is within the target of
//!    the current `advance_to` call fire in that same call.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use slate_core::timer::{Scheduler, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let id = timers.schedule(Duration::from_millis(240));
//! let mut fired = Vec::new();
//! timers.advance(Duration::from_millis(300), |t, _| fired.push(t));
//! assert_eq!(fired, vec![id]);
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::time::Duration;

use crate::clock::{Clock, DeterministicClock};

/// Opaque handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw numeric value, useful for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Schedules and cancels one-shot timers.
pub trait Scheduler {
    /// Current time.
    fn now(&self) -> Duration;

    /// Schedule a timer that fires `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it already fired, was
    /// already cancelled, or was never issued by this scheduler.
    fn cancel(&mut self, id: TimerId) -> bool;
}

/// Host-side timer queue over a virtual clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    clock: DeterministicClock,
    next_id: u64,
    queue: BTreeSet<(Duration, TimerId)>,
    deadlines: HashMap<TimerId, Duration>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: Duration) -> Self {
        Self {
            clock: DeterministicClock::starting_at(now),
            ..Self::default()
        }
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.deadlines.len()
    }

    /// Whether `id` is scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.deadlines.get(&id).copied()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|&(deadline, _)| deadline)
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let &(deadline, id) = self.queue.first()?;
        if deadline > until {
            return None;
        }
        self.queue.pop_first();
        self.deadlines.remove(&id);
        self.clock.set(deadline);
        crate::trace!(timer = id.get(), at_ms = deadline.as_millis() as u64, "timer due");
        Some(id)
    }

    /// Fire every timer due up to `target` in order, then move the clock to
    /// `target`. Returns the number of timers fired.
    ///
    /// `fire` receives the queue so handlers can schedule or cancel timers.
    pub fn advance_to<F>(&mut self, target: Duration, mut fire: F) -> usize
    where
        F: FnMut(TimerId, &mut Self),
    {
        let mut fired = 0;
        while let Some(id) = self.pop_due(target) {
            fire(id, self);
            fired += 1;
        }
        self.clock.set(target);
        fired
    }

    /// Advance the clock by `dt`, firing due timers.
    pub fn advance<F>(&mut self, dt: Duration, fire: F) -> usize
    where
        F: FnMut(TimerId, &mut Self),
    {
        let target = self.clock.now().saturating_add(dt);
        self.advance_to(target, fire)
    }

    /// Catch up with an external clock.
    pub fn poll<C, F>(&mut self, clock: &C, fire: F) -> usize
    where
        C: Clock,
        F: FnMut(TimerId, &mut Self),
    {
        self.advance_to(clock.now(), fire)
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let deadline = self.clock.now().saturating_add(delay);
        self.queue.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        crate::trace!(timer = id.get(), delay_ms = delay.as_millis() as u64, "timer scheduled");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.queue.remove(&(deadline, id));
                crate::trace!(timer = id.get(), "timer cancelled");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_240: Duration = Duration::from_millis(240);

    fn drain(timers: &mut TimerQueue, target: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        timers.advance_to(target, |id, _| fired.push(id));
        fired
    }

    #[test]
    fn ids_are_unique() {
        let mut timers = TimerQueue::new();
        let a = timers.schedule(MS_100);
        let b = timers.schedule(MS_100);
        assert_ne!(a, b);
        assert_eq!(timers.pending_count(), 2);
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(MS_240);
        let early = timers.schedule(MS_100);
        assert_eq!(drain(&mut timers, MS_240), vec![early, late]);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule(MS_100);
        let second = timers.schedule(MS_100);
        assert_eq!(drain(&mut timers, MS_100), vec![first, second]);
    }

    #[test]
    fn not_fired_before_deadline() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(MS_240);
        assert!(drain(&mut timers, Duration::from_millis(239)).is_empty());
        assert!(timers.is_pending(id));
        assert_eq!(drain(&mut timers, MS_240), vec![id]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(MS_100);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(drain(&mut timers, MS_240).is_empty());
    }

    #[test]
    fn cancel_unknown_id_is_noop() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(MS_100);
        assert!(!timers.cancel(TimerId(999)));
        assert!(timers.is_pending(id));
    }

    #[test]
    fn clock_sits_on_deadline_while_firing() {
        let mut timers = TimerQueue::new();
        timers.schedule(MS_100);
        let mut seen = None;
        timers.advance_to(MS_240, |_, q| seen = Some(q.now()));
        assert_eq!(seen, Some(MS_100));
        assert_eq!(timers.now(), MS_240);
    }

    #[test]
    fn nested_schedule_fires_within_same_advance() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule(MS_100);
        let mut order = Vec::new();
        timers.advance_to(Duration::from_millis(400), |id, q| {
            order.push((id, q.now()));
            if id == first {
                q.schedule(MS_240);
            }
        });
        assert_eq!(order.len(), 2);
        assert_eq!(order[1].1, Duration::from_millis(340));
    }

    #[test]
    fn nested_schedule_past_target_stays_pending() {
        let mut timers = TimerQueue::new();
        timers.schedule(MS_100);
        let fired = timers.advance_to(MS_240, |_, q| {
            q.schedule(MS_240);
        });
        assert_eq!(fired, 1);
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(340)));
    }

    #[test]
    fn advance_to_past_is_noop() {
        let mut timers = TimerQueue::starting_at(MS_240);
        timers.schedule(MS_100);
        assert_eq!(timers.advance_to(MS_100, |_, _| {}), 0);
        assert_eq!(timers.now(), MS_240);
    }

    #[test]
    fn poll_follows_external_clock() {
        let mut clock = DeterministicClock::new();
        let mut timers = TimerQueue::new();
        let id = timers.schedule(MS_100);
        clock.advance(MS_240);
        let mut fired = Vec::new();
        timers.poll(&clock, |t, _| fired.push(t));
        assert_eq!(fired, vec![id]);
        assert_eq!(timers.now(), MS_240);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(Duration::ZERO);
        assert_eq!(drain(&mut timers, Duration::ZERO), vec![id]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut timers = TimerQueue::new();
        timers.schedule(MS_100);
        timers.schedule(MS_240);
        timers.clear();
        assert_eq!(timers.pending_count(), 0);
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn timer_id_display() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(MS_100);
        assert_eq!(id.to_string(), format!("timer#{}", id.get()));
    }
}
