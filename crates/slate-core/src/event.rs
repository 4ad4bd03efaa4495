#![forbid(unsafe_code)]

//! Events delivered by the rendering host.

use crate::timer::TimerId;

/// An event the host forwards to a component instance.
///
/// The host owns pointer tracking, element attachment, and timer dispatch;
/// components only see these already-resolved notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The pointer entered the component's box.
    PointerEnter,
    /// The pointer left the component's box.
    PointerLeave,
    /// The measured inner element was attached and laid out.
    Attached {
        /// Rendered height in layout units.
        height: f32,
    },
    /// The measured inner element was detached. Carries no measurement.
    Detached,
    /// A timer issued to this component reached its deadline.
    Timer(TimerId),
}

impl HostEvent {
    /// Whether this is a pointer enter/leave event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::PointerEnter | Self::PointerLeave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_classification() {
        assert!(HostEvent::PointerEnter.is_pointer());
        assert!(HostEvent::PointerLeave.is_pointer());
        assert!(!HostEvent::Detached.is_pointer());
        assert!(!HostEvent::Attached { height: 40.0 }.is_pointer());
    }
}
