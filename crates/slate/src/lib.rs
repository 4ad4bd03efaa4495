#![forbid(unsafe_code)]

//! Slate public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use slate_core::animation::{
    ACCELERATION, CLOSE_KEYFRAME_DURATION, CubicBezier, DECELERATION, SPRING,
    TRANSITION_DURATION,
};
pub use slate_core::{
    Clock, DeterministicClock, HostEvent, MonotonicClock, Scheduler, TimerId, TimerQueue,
};

// --- Style re-exports ------------------------------------------------------

pub use slate_style::{BoxProps, Color, Interaction, Theme, ThemeBuilder, ThemeError};

// --- Widget re-exports -----------------------------------------------------

pub use slate_widgets::list_item::{
    Actions, Column, Content, Heading, HoverActions, Info, Left, Link, Right,
};
pub use slate_widgets::{
    Alert, AlertAction, AlertColor, ListItem, MotionFrame, Slot, Toast, ToastConfig, ToastEvent,
    ToastId, ToastView, Transition, TransitionPhase,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Slate hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading host resources (theme files).
    Io(std::io::Error),
    /// A theme document could not be loaded.
    Theme(ThemeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Theme(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Self::Theme(err)
    }
}

/// Standard result type for Slate APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Read and parse a JSON theme document, layered over the default theme.
#[cfg(feature = "serde")]
pub fn load_theme(path: impl AsRef<std::path::Path>) -> Result<Theme> {
    let text = std::fs::read_to_string(path)?;
    Ok(Theme::from_json(&text)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AlertColor, Error, HostEvent, Interaction, ListItem, Result, Scheduler, Slot, Theme,
        TimerQueue, Toast, ToastConfig, ToastEvent, TransitionPhase,
    };

    pub use crate::{core, style, widgets};
}

pub use slate_core as core;
pub use slate_style as style;
pub use slate_widgets as widgets;
