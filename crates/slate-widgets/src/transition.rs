#![forbid(unsafe_code)]

//! Enter/exit phase driver.
//!
//! A [`Transition`] turns a boolean "in" flag into a four-phase sequence
//! that the presentation surface keys its animations on:
//!
//! ```text
//! mount(in) ──► Entering ──timeout──► Entered
//!                  │                     │
//!               in=false              in=false
//!                  ▼                     ▼
//!                Exiting ──timeout──► Exited ──► on_exited()
//! ```
//!
//! Mounting with `in = false` starts directly in `Exiting`.
//!
//! # Invariants
//!
//! 1. Phases only move forward; nothing leaves `Exited`.
//! 2. `Exiting` is never skipped on the way to `Exited`.
//! 3. At most one phase timer is pending.
//! 4. `on_exited` runs exactly once, synchronously with entering `Exited`,
//!    and never after [`dispose`](Transition::dispose).
//!
//! The timeout is fixed per transition, independent of how long the
//! component stayed visible.

use std::fmt;
use std::time::Duration;

use slate_core::timer::{Scheduler, TimerId};

/// Callback run once the exit sequence has finished.
pub type ExitCallback = Box<dyn FnOnce()>;

/// Phase of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Animating in.
    Entering,
    /// Fully shown.
    Entered,
    /// Animating out.
    Exiting,
    /// Gone. Terminal.
    Exited,
}

impl TransitionPhase {
    /// Token handed to the presentation surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
            Self::Exited => "exited",
        }
    }

    /// Whether this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exited)
    }

    /// Whether a phase timer runs in this phase.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-phase enter/exit driver.
pub struct Transition {
    phase: TransitionPhase,
    timeout: Duration,
    phase_started: Duration,
    pending: Option<TimerId>,
    history: Vec<TransitionPhase>,
    on_exited: Option<ExitCallback>,
    disposed: bool,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("phase", &self.phase)
            .field("timeout", &self.timeout)
            .field("phase_started", &self.phase_started)
            .field("pending", &self.pending)
            .field("history", &self.history)
            .field("has_exit_callback", &self.on_exited.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl Transition {
    /// Mount the driver and schedule its first phase timer.
    pub fn mount<S>(
        shown: bool,
        timeout: Duration,
        on_exited: Option<ExitCallback>,
        sched: &mut S,
    ) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let first = if shown {
            TransitionPhase::Entering
        } else {
            TransitionPhase::Exiting
        };
        let mut transition = Self {
            phase: first,
            timeout,
            phase_started: sched.now(),
            pending: None,
            history: Vec::with_capacity(4),
            on_exited,
            disposed: false,
        };
        transition.enter(first, sched);
        transition
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Every phase entered so far, in order.
    #[must_use]
    pub fn history(&self) -> &[TransitionPhase] {
        &self.history
    }

    /// Fixed phase timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// When the current phase began.
    #[must_use]
    pub fn phase_started(&self) -> Duration {
        self.phase_started
    }

    /// Time spent in the current phase as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.phase_started)
    }

    /// The pending phase timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Whether `id` is this driver's pending phase timer.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.pending == Some(id)
    }

    /// Whether [`dispose`](Self::dispose) was called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Update the "in" flag. Returns `true` if the phase changed.
    ///
    /// Only `false` has an effect, and only before the exit sequence began.
    pub fn set_in<S>(&mut self, shown: bool, sched: &mut S) -> bool
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed || shown {
            return false;
        }
        match self.phase {
            TransitionPhase::Entering | TransitionPhase::Entered => {
                if let Some(id) = self.pending.take() {
                    sched.cancel(id);
                }
                self.enter(TransitionPhase::Exiting, sched);
                true
            }
            TransitionPhase::Exiting | TransitionPhase::Exited => false,
        }
    }

    /// Deliver an expired timer. Returns the new phase if `id` was this
    /// driver's pending timer.
    pub fn fire<S>(&mut self, id: TimerId, sched: &mut S) -> Option<TransitionPhase>
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed || !self.owns(id) {
            return None;
        }
        self.pending = None;
        let next = match self.phase {
            TransitionPhase::Entering => TransitionPhase::Entered,
            TransitionPhase::Exiting => TransitionPhase::Exited,
            TransitionPhase::Entered | TransitionPhase::Exited => return None,
        };
        self.enter(next, sched);
        Some(next)
    }

    /// Cancel the pending phase timer and drop the exit callback.
    pub fn dispose<S>(&mut self, sched: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if let Some(id) = self.pending.take() {
            sched.cancel(id);
        }
        self.on_exited = None;
        self.disposed = true;
    }

    fn enter<S>(&mut self, phase: TransitionPhase, sched: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("transition_phase", phase = phase.as_str()).entered();

        self.phase = phase;
        self.phase_started = sched.now();
        self.history.push(phase);

        if phase.is_animating() {
            self.pending = Some(sched.schedule(self.timeout));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            phase = phase.as_str(),
            at_ms = self.phase_started.as_millis() as u64,
            "transition phase entered"
        );

        if phase.is_terminal()
            && let Some(on_exited) = self.on_exited.take()
        {
            on_exited();
        }
    }
}
