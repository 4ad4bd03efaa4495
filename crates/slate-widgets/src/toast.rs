#![forbid(unsafe_code)]

//! Dismissible toast notification.
//!
//! A [`Toast`] wraps an [`Alert`] and owns its lifecycle: an optional
//! auto-dismiss deadline that pauses while the pointer hovers, a
//! [`Transition`] that runs the enter and exit animations, and the height
//! measurement used to collapse the space the toast occupied.
//!
//! The controller never reads a clock or sleeps. Every operation takes a
//! [`Scheduler`]; expired timers come back through [`Toast::fire`] (or
//! [`Toast::handle_event`] with [`HostEvent::Timer`]).
//!
//! # Lifecycle
//!
//! ```text
//! new ─► Entering ─240ms─► Entered ─┐
//!   │                               │ close (deadline, dismiss, hide)
//!   └── dismiss timer ──────────────┤
//!                                   ▼
//!                         Exiting ─240ms─► Exited ─► on_remove()
//! ```
//!
//! # Invariants
//!
//! 1. At most one dismiss timer is pending.
//! 2. `is_shown` goes from `true` to `false` at most once.
//! 3. `on_remove` runs exactly once, after the exit finished, and never
//!    after [`finalize`](Toast::finalize).
//! 4. `measured_height` only changes on attach.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use slate_core::timer::TimerQueue;
//! use slate_widgets::{Toast, ToastConfig, TransitionPhase};
//!
//! let mut timers = TimerQueue::new();
//! let mut toast = Toast::new(
//!     ToastConfig::new("Saved").duration(Duration::from_secs(3)),
//!     &mut timers,
//! );
//! timers.advance_to(Duration::from_secs(4), |id, q| {
//!     toast.fire(id, q);
//! });
//! assert_eq!(toast.phase(), TransitionPhase::Exited);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use slate_core::animation::{
    ACCELERATION, CLOSE_KEYFRAME_DURATION, DECELERATION, SPRING, TRANSITION_DURATION, lerp,
    progress,
};
use slate_core::event::HostEvent;
use slate_core::timer::{Scheduler, TimerId};

use crate::alert::{Alert, AlertAction, AlertColor, PointerEvents};
use crate::transition::{ExitCallback, Transition, TransitionPhase};

/// Inner padding around the alert card.
pub const TOAST_PADDING: f32 = 8.0;

/// Starting vertical offset of the open keyframes, as a fraction of the
/// toast's own height.
const OPEN_TRANSLATE_Y: f32 = -1.2;

/// Final scale of the close keyframes.
const CLOSE_SCALE: f32 = 0.9;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a toast instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocate a fresh process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Construction-time options for a [`Toast`].
pub struct ToastConfig {
    z_index: Option<i32>,
    duration: Option<Duration>,
    color: AlertColor,
    title: Option<String>,
    body: String,
    shown: bool,
    on_remove: Option<ExitCallback>,
}

impl fmt::Debug for ToastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastConfig")
            .field("z_index", &self.z_index)
            .field("duration", &self.duration)
            .field("color", &self.color)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("shown", &self.shown)
            .field("on_remove", &self.on_remove.is_some())
            .finish()
    }
}

impl ToastConfig {
    /// Shown, green, no auto-dismiss.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            z_index: None,
            duration: None,
            color: AlertColor::default(),
            title: None,
            body: body.into(),
            shown: true,
            on_remove: None,
        }
    }

    /// Stacking order hint.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Auto-dismiss after `duration`. Zero disables auto-dismiss.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = (!duration.is_zero()).then_some(duration);
        self
    }

    /// Auto-dismiss after `secs` seconds.
    ///
    /// Zero, negative, and non-finite values disable auto-dismiss.
    #[must_use]
    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration = Duration::try_from_secs_f64(secs)
            .ok()
            .filter(|d| !d.is_zero());
        self
    }

    /// Severity.
    #[must_use]
    pub fn color(mut self, color: AlertColor) -> Self {
        self.color = color;
        self
    }

    /// Heading line.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Initial shown intent.
    #[must_use]
    pub fn shown(mut self, shown: bool) -> Self {
        self.shown = shown;
        self
    }

    /// Called once after the exit animation finished.
    #[must_use]
    pub fn on_remove(mut self, on_remove: impl FnOnce() + 'static) -> Self {
        self.on_remove = Some(Box::new(on_remove));
        self
    }

    /// Configured auto-dismiss delay.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.duration
    }
}

/// Mutable lifecycle state of a [`Toast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastState {
    /// Whether the toast is (or is becoming) visible.
    pub is_shown: bool,
    /// Last measured height of the inner element.
    pub measured_height: f32,
    /// Pending auto-dismiss timer.
    pub dismiss_timer: Option<TimerId>,
}

impl Default for ToastState {
    fn default() -> Self {
        Self {
            is_shown: true,
            measured_height: 0.0,
            dismiss_timer: None,
        }
    }
}

/// Outcome of a toast operation, for hosts that want to react.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastEvent {
    /// Nothing changed.
    None,
    /// A new height was recorded.
    Measured(f32),
    /// The dismiss countdown was suspended.
    TimerPaused,
    /// The dismiss countdown was restarted from the full duration.
    TimerRestarted,
    /// The toast started closing.
    Closed,
    /// The transition moved to a new phase.
    Phase(TransitionPhase),
}

/// Per-frame animated values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// 0 is transparent, 1 is opaque.
    pub opacity: f32,
    /// Vertical offset as a fraction of the toast's height.
    pub translate_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl MotionFrame {
    /// No transform, fully opaque.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

/// Presentation hints for one frame of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    /// Current transition phase.
    pub phase: TransitionPhase,
    /// Stacking order hint.
    pub z_index: Option<i32>,
    /// Height of the wrapper, collapsing toward zero while exiting.
    pub height: f32,
    /// Bottom margin: zero while shown, minus the measured height otherwise,
    /// so following toasts slide up into the freed space.
    pub margin_bottom: f32,
    /// Animated transform of the card.
    pub motion: MotionFrame,
    /// Padding around the card.
    pub padding: f32,
    /// The wrapped alert.
    pub alert: Alert,
}

/// A dismissible toast notification controller.
pub struct Toast {
    id: ToastId,
    z_index: Option<i32>,
    duration: Option<Duration>,
    color: AlertColor,
    title: Option<String>,
    body: String,
    state: ToastState,
    prev_shown_intent: bool,
    transition: Transition,
    disposed: bool,
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("z_index", &self.z_index)
            .field("duration", &self.duration)
            .field("color", &self.color)
            .field("state", &self.state)
            .field("transition", &self.transition)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Toast {
    /// Create a toast, mount its transition, and start the dismiss timer.
    pub fn new<S>(config: ToastConfig, sched: &mut S) -> Self
    where
        S: Scheduler + ?Sized,
    {
        let ToastConfig {
            z_index,
            duration,
            color,
            title,
            body,
            shown,
            on_remove,
        } = config;

        let id = ToastId::next();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            toast = id.get(),
            shown,
            duration_ms = duration.map(|d| d.as_millis() as u64),
            "toast created"
        );

        let transition = Transition::mount(shown, TRANSITION_DURATION, on_remove, sched);
        let mut toast = Self {
            id,
            z_index,
            duration,
            color,
            title,
            body,
            state: ToastState {
                is_shown: shown,
                ..ToastState::default()
            },
            prev_shown_intent: shown,
            transition,
            disposed: false,
        };
        toast.start_dismiss_timer(sched);
        toast
    }

    /// Instance id.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> &ToastState {
        &self.state
    }

    /// Whether the toast is (or is becoming) visible.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.state.is_shown
    }

    /// Last measured height.
    #[must_use]
    pub fn measured_height(&self) -> f32 {
        self.state.measured_height
    }

    /// Pending dismiss timer.
    #[must_use]
    pub fn dismiss_timer(&self) -> Option<TimerId> {
        self.state.dismiss_timer
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// The underlying transition driver.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Stacking order hint.
    #[must_use]
    pub fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    /// Configured auto-dismiss delay.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Whether [`finalize`](Self::finalize) was called.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.disposed
    }

    /// Whether the exit finished and the host should unmount.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.transition.phase().is_terminal()
    }

    /// Update the shown intent.
    ///
    /// Only changes of the intent are acted on. Hiding closes the toast
    /// without touching the dismiss timer; showing a toast that already
    /// started closing is ignored.
    pub fn set_shown<S>(&mut self, shown: bool, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed || shown == self.prev_shown_intent {
            return ToastEvent::None;
        }
        self.prev_shown_intent = shown;

        if shown {
            #[cfg(feature = "tracing")]
            tracing::debug!(toast = self.id.get(), "show intent after close ignored");
            return ToastEvent::None;
        }

        self.state.is_shown = false;
        if self.transition.set_in(false, sched) {
            ToastEvent::Closed
        } else {
            ToastEvent::None
        }
    }

    /// Cancel the dismiss timer and start the exit. Idempotent.
    pub fn close<S>(&mut self, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            return ToastEvent::None;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("toast_close", toast = self.id.get()).entered();

        self.cancel_dismiss_timer(sched);
        if !self.state.is_shown {
            return ToastEvent::None;
        }
        self.state.is_shown = false;
        self.transition.set_in(false, sched);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            toast = self.id.get(),
            at_ms = sched.now().as_millis() as u64,
            "toast closing"
        );

        ToastEvent::Closed
    }

    /// (Re)start the dismiss countdown from the full duration.
    ///
    /// Without a duration this is a no-op.
    pub fn start_dismiss_timer<S>(&mut self, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            return ToastEvent::None;
        }
        self.cancel_dismiss_timer(sched);
        let Some(duration) = self.duration else {
            return ToastEvent::None;
        };
        let timer = sched.schedule(duration);
        self.state.dismiss_timer = Some(timer);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            toast = self.id.get(),
            timer = timer.get(),
            duration_ms = duration.as_millis() as u64,
            "dismiss timer started"
        );

        ToastEvent::TimerRestarted
    }

    /// Cancel the dismiss countdown if one is pending.
    pub fn cancel_dismiss_timer<S>(&mut self, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        match self.state.dismiss_timer.take() {
            Some(timer) => {
                sched.cancel(timer);
                ToastEvent::TimerPaused
            }
            None => ToastEvent::None,
        }
    }

    /// Pointer entered: pause the countdown.
    pub fn pointer_enter<S>(&mut self, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            return ToastEvent::None;
        }
        self.cancel_dismiss_timer(sched)
    }

    /// Pointer left: restart the countdown from the full duration.
    pub fn pointer_leave<S>(&mut self, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        self.start_dismiss_timer(sched)
    }

    /// The inner element was laid out with `height`.
    ///
    /// Every attach overwrites the previous measurement. Negative and
    /// non-finite heights are ignored.
    pub fn attach(&mut self, height: f32) -> ToastEvent {
        if self.disposed || !height.is_finite() || height < 0.0 {
            return ToastEvent::None;
        }
        self.state.measured_height = height;
        ToastEvent::Measured(height)
    }

    /// The inner element was detached. Keeps the last measurement.
    pub fn detach(&mut self) -> ToastEvent {
        ToastEvent::None
    }

    /// Tear down: cancel every timer and drop `on_remove` unfired.
    pub fn finalize<S>(&mut self, sched: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            return;
        }
        self.cancel_dismiss_timer(sched);
        self.transition.dispose(sched);
        self.disposed = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(toast = self.id.get(), "toast finalized");
    }

    /// Deliver an expired timer issued to this toast.
    ///
    /// Ids this toast does not own, stale ids, and anything after
    /// [`finalize`](Self::finalize) are ignored.
    pub fn fire<S>(&mut self, timer: TimerId, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        if self.disposed {
            return ToastEvent::None;
        }
        if self.state.dismiss_timer == Some(timer) {
            self.state.dismiss_timer = None;

            #[cfg(feature = "tracing")]
            tracing::debug!(toast = self.id.get(), timer = timer.get(), "dismiss timer expired");

            return self.close(sched);
        }
        match self.transition.fire(timer, sched) {
            Some(phase) => ToastEvent::Phase(phase),
            None => ToastEvent::None,
        }
    }

    /// Dispatch a host event.
    pub fn handle_event<S>(&mut self, event: &HostEvent, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        match *event {
            HostEvent::PointerEnter => self.pointer_enter(sched),
            HostEvent::PointerLeave => self.pointer_leave(sched),
            HostEvent::Attached { height } => self.attach(height),
            HostEvent::Detached => self.detach(),
            HostEvent::Timer(timer) => self.fire(timer, sched),
        }
    }

    /// Handle an action reported by the wrapped alert.
    pub fn handle_alert_action<S>(&mut self, action: AlertAction, sched: &mut S) -> ToastEvent
    where
        S: Scheduler + ?Sized,
    {
        match action {
            AlertAction::Dismiss => self.close(sched),
        }
    }

    /// The wrapped alert card.
    #[must_use]
    pub fn alert(&self) -> Alert {
        let alert = Alert::new(self.color, self.body.clone())
            .with_icon(true)
            .dismissable(true)
            .pointer_events(PointerEvents::All);
        match &self.title {
            Some(title) => alert.title(title.clone()),
            None => alert,
        }
    }

    /// Motion values at `now` for the current phase.
    #[must_use]
    pub fn motion(&self, now: Duration) -> MotionFrame {
        let elapsed = self.transition.elapsed(now);
        match self.transition.phase() {
            TransitionPhase::Entering => {
                let t = progress(elapsed, TRANSITION_DURATION);
                let eased = SPRING.apply(t);
                MotionFrame {
                    opacity: lerp(0.0, 1.0, eased).clamp(0.0, 1.0),
                    translate_y: lerp(OPEN_TRANSLATE_Y, 0.0, eased),
                    scale: 1.0,
                }
            }
            TransitionPhase::Entered => MotionFrame::IDENTITY,
            TransitionPhase::Exiting | TransitionPhase::Exited => {
                let t = progress(elapsed, CLOSE_KEYFRAME_DURATION);
                let eased = ACCELERATION.apply(t);
                MotionFrame {
                    opacity: lerp(1.0, 0.0, eased),
                    translate_y: 0.0,
                    scale: lerp(1.0, CLOSE_SCALE, eased),
                }
            }
        }
    }

    /// Wrapper height at `now`: the measured height, eased toward zero
    /// while exiting.
    #[must_use]
    pub fn collapse_height(&self, now: Duration) -> f32 {
        let measured = self.state.measured_height;
        match self.transition.phase() {
            TransitionPhase::Exiting => {
                let t = progress(self.transition.elapsed(now), TRANSITION_DURATION);
                lerp(measured, 0.0, DECELERATION.apply(t))
            }
            TransitionPhase::Exited => 0.0,
            TransitionPhase::Entering | TransitionPhase::Entered => measured,
        }
    }

    /// Presentation hints at `now`. `None` once the toast should unmount.
    #[must_use]
    pub fn view(&self, now: Duration) -> Option<ToastView> {
        let phase = self.transition.phase();
        if phase.is_terminal() {
            return None;
        }
        let margin_bottom = if self.state.is_shown {
            0.0
        } else {
            -self.state.measured_height
        };
        Some(ToastView {
            phase,
            z_index: self.z_index,
            height: self.collapse_height(now),
            margin_bottom,
            motion: self.motion(now),
            padding: TOAST_PADDING,
            alert: self.alert(),
        })
    }
}
