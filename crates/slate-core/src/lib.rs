#![forbid(unsafe_code)]

//! Core: clocks, cancellable timers, host events, and motion constants.

pub mod animation;
pub mod clock;
pub mod event;
pub mod logging;
pub mod timer;

pub use clock::{Clock, DeterministicClock, MonotonicClock};
pub use event::HostEvent;
pub use timer::{Scheduler, TimerId, TimerQueue};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
