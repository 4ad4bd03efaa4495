#![forbid(unsafe_code)]

//! Alert descriptor.
//!
//! An alert is the card a toast wraps: an icon, an optional title, body
//! text and a dismiss control, tinted by severity. This module only
//! describes it; painting belongs to the presentation surface.

use slate_style::{BorderSide, BoxProps, Color, Interaction, Shadow, Sides, Theme};

use crate::Slot;

/// Semantic severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AlertColor {
    /// Success.
    #[default]
    Green,
    /// Failure.
    Red,
}

impl AlertColor {
    /// Stable token for the presentation surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }

    /// Theme color key for the accent.
    #[must_use]
    pub const fn theme_key(self) -> &'static str {
        self.as_str()
    }

    /// Icon shown for this severity.
    #[must_use]
    pub const fn icon(self) -> AlertIcon {
        match self {
            Self::Green => AlertIcon::Check,
            Self::Red => AlertIcon::Warning,
        }
    }
}

/// Icon glyph for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    /// Check mark.
    Check,
    /// Exclamation mark.
    Warning,
}

impl AlertIcon {
    /// Display character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Check => '\u{2713}',
            Self::Warning => '!',
        }
    }
}

/// Which pointer events the box receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    /// Inherit from the parent.
    #[default]
    Auto,
    /// Receive every pointer event, even inside a pass-through overlay.
    All,
    /// Ignore pointer events.
    None,
}

/// Actions an alert can report back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// The dismiss control was activated.
    Dismiss,
}

/// Description of an alert card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub color: AlertColor,
    /// Optional heading line.
    pub title: Option<String>,
    /// Body text.
    pub body: String,
    /// Whether to show the severity icon.
    pub has_icon: bool,
    /// Whether to show the dismiss control.
    pub dismissable: bool,
    /// Pointer event policy.
    pub pointer_events: PointerEvents,
}

const ACCENT_WIDTH: f32 = 4.0;

impl Alert {
    /// Create an alert with a body.
    pub fn new(color: AlertColor, body: impl Into<String>) -> Self {
        Self {
            color,
            title: None,
            body: body.into(),
            has_icon: false,
            dismissable: false,
            pointer_events: PointerEvents::Auto,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Show the severity icon.
    #[must_use]
    pub fn with_icon(mut self, has_icon: bool) -> Self {
        self.has_icon = has_icon;
        self
    }

    /// Show the dismiss control.
    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    /// Set the pointer event policy.
    #[must_use]
    pub fn pointer_events(mut self, policy: PointerEvents) -> Self {
        self.pointer_events = policy;
        self
    }

    /// Icon to display, if enabled.
    #[must_use]
    pub fn icon(&self) -> Option<AlertIcon> {
        self.has_icon.then(|| self.color.icon())
    }
}

impl Slot for Alert {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        let accent = theme.resolve_color(self.color.theme_key());
        BoxProps::new()
            .padding(Sides::symmetric(theme.resolve_space(3), theme.resolve_space(4)))
            .background(theme.color("white").unwrap_or(Color::WHITE))
            .color(theme.resolve_color("grays.7"))
            .border_left(BorderSide {
                width: ACCENT_WIDTH,
                color: accent,
            })
            .box_shadow(Shadow {
                x: 0.0,
                y: 4.0,
                blur: 10.0,
                spread: 0.0,
                color: Color::BLACK.with_opacity(0.1),
            })
    }
}
