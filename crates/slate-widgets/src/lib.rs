#![forbid(unsafe_code)]

//! Widgets for Slate: list rows, alerts, and toast notifications.

pub mod alert;
pub mod list_item;
pub mod toast;
pub mod transition;

pub use alert::{Alert, AlertAction, AlertColor, AlertIcon, PointerEvents};
pub use list_item::ListItem;
pub use toast::{MotionFrame, Toast, ToastConfig, ToastEvent, ToastId, ToastState, ToastView};
pub use transition::{Transition, TransitionPhase};

use slate_style::{BoxProps, Interaction, Theme};

/// A styled box that resolves its presentation properties from a theme.
///
/// Slots carry no state of their own. The host reports pointer and focus
/// state through `state`, and paints whatever the slot returns.
pub trait Slot {
    /// Resolve this slot's properties.
    fn props(&self, theme: &Theme, state: Interaction) -> BoxProps;
}
