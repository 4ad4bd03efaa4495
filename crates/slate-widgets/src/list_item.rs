#![forbid(unsafe_code)]

//! List row layout primitive.
//!
//! A [`ListItem`] is a full-width flex row with a minimum height. Its
//! content is arranged through slots:
//!
//! ```text
//! ┌──────┬──────────────────────────────┬─────────┬──────┐
//! │ Left │ Content (Heading / Info)     │ Actions │ Link │
//! └──────┴──────────────────────────────┴─────────┴──────┘
//! ```
//!
//! Spacing and colors are theme steps and keys, resolved per call. Hover
//! behaviour is driven by the [`Interaction`] state the host reports: a
//! hovered row reveals its [`HoverActions`], and a clickable row gains a
//! lifted shadow and a pointer cursor.

use std::time::Duration;

use slate_style::{
    Align, BorderSide, BoxProps, Color, Cursor, Display, Interaction, Justify, Length, Shadow,
    Sides, TextDecoration, Theme,
};

use crate::Slot;

/// Horizontal padding step shared by the padded slots.
const PX: usize = 5;
/// Vertical padding step shared by the padded slots.
const PY: usize = 4;

const SHADOW_TRANSITION: Duration = Duration::from_millis(100);

fn hover_shadow() -> Shadow {
    Shadow {
        x: 0.0,
        y: 4.0,
        blur: 10.0,
        spread: 0.0,
        color: Color::BLACK.with_opacity(0.05),
    }
}

/// The row container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListItem {
    clickable: bool,
}

impl ListItem {
    /// Minimum row height in layout units.
    pub const MIN_HEIGHT: f32 = 66.0;

    /// Create a non-clickable row.
    #[must_use]
    pub const fn new() -> Self {
        Self { clickable: false }
    }

    /// Mark the row as having a click handler.
    #[must_use]
    pub const fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Whether the row has a click handler.
    #[must_use]
    pub const fn is_clickable(&self) -> bool {
        self.clickable
    }
}

impl Slot for ListItem {
    fn props(&self, _theme: &Theme, state: Interaction) -> BoxProps {
        let base = BoxProps::new()
            .display(Display::Flex)
            .justify_content(Justify::SpaceBetween)
            .align_items(Align::Center)
            .min_height(Self::MIN_HEIGHT)
            .width(Length::Percent(100.0))
            .transition("box-shadow", SHADOW_TRANSITION);

        if self.clickable && state.contains(Interaction::HOVERED) {
            base.box_shadow(hover_shadow()).cursor(Cursor::Pointer)
        } else {
            base
        }
    }
}

/// Actions revealed only while the row is hovered.
///
/// Its state argument is the *row's* interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverActions;

impl HoverActions {
    /// Whether the actions are visible for the given row state.
    #[must_use]
    pub fn is_visible(row: Interaction) -> bool {
        row.contains(Interaction::HOVERED)
    }
}

impl Slot for HoverActions {
    fn props(&self, _theme: &Theme, row: Interaction) -> BoxProps {
        let display = if Self::is_visible(row) {
            Display::Block
        } else {
            Display::None
        };
        BoxProps::new().display(display)
    }
}

/// Primary text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heading;

impl Slot for Heading {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::new()
            .font_size(theme.resolve_font_size(2))
            .font_weight(theme.resolve_font_weight(1))
    }
}

/// Secondary, muted text under the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Info;

impl Slot for Info {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::new()
            .pt(theme.resolve_space(1))
            .color(theme.resolve_color("grays.4"))
    }
}

/// Trailing cell with centered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Right;

impl Slot for Right {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::centered_flex()
            .py(theme.resolve_space(PY))
            .px(theme.resolve_space(PX))
    }
}

/// Leading cell with centered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Left;

impl Slot for Left {
    fn props(&self, _theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::centered_flex()
    }
}

/// Inline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Column;

impl Slot for Column {
    fn props(&self, _theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::new().display(Display::InlineBlock)
    }
}

/// Full-height trailing link cell separated by a left border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Link;

impl Slot for Link {
    fn props(&self, theme: &Theme, state: Interaction) -> BoxProps {
        let props = BoxProps::new()
            .display(Display::Flex)
            .align_items(Align::Center)
            .align_self(Align::Stretch)
            .border_left(BorderSide {
                width: 1.0,
                color: theme.resolve_color("grays.2"),
            })
            .padding(Sides::symmetric(theme.resolve_space(4), theme.resolve_space(5)));

        if state.contains(Interaction::HOVERED) {
            props.background(theme.resolve_color("grays.0"))
        } else {
            props
        }
    }
}

/// The growing middle cell holding heading and info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Content {
    linked: bool,
}

impl Content {
    /// Slot name reported to the presentation surface.
    pub const NAME: &'static str = "Content";

    /// Create an unlinked content cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { linked: false }
    }

    /// Mark the cell as a navigation target (it has an `href` or route).
    #[must_use]
    pub const fn linked(mut self, linked: bool) -> Self {
        self.linked = linked;
        self
    }

    /// Heading properties inside this cell.
    ///
    /// A linked cell highlights its heading while the heading is hovered.
    #[must_use]
    pub fn heading_props(&self, theme: &Theme, heading: Interaction) -> BoxProps {
        let props = Heading.props(theme, heading);
        if self.linked && heading.contains(Interaction::HOVERED) {
            props.color(theme.resolve_color("blue"))
        } else {
            props
        }
    }
}

impl Slot for Content {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        let props = BoxProps::new()
            .flex(1.0)
            .py(theme.resolve_space(PY))
            .px(theme.resolve_space(PX));
        if self.linked {
            props.text_decoration(TextDecoration::None)
        } else {
            props
        }
    }
}

/// Right-aligned action area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actions;

impl Actions {
    /// Extra properties for a [`HoverActions`] child.
    ///
    /// When it is the only child it is pushed to the far end.
    #[must_use]
    pub fn hover_actions_props(&self, only_child: bool) -> BoxProps {
        if only_child {
            BoxProps::new().margin_left(Length::Auto)
        } else {
            BoxProps::new()
        }
    }
}

impl Slot for Actions {
    fn props(&self, theme: &Theme, _state: Interaction) -> BoxProps {
        BoxProps::new()
            .display(Display::Flex)
            .align_items(Align::Center)
            .justify_content(Justify::End)
            .px(theme.resolve_space(PX))
            .py(theme.resolve_space(PY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn row_defaults() {
        let props = ListItem::new().props(&theme(), Interaction::empty());
        assert_eq!(props.display, Some(Display::Flex));
        assert_eq!(props.justify_content, Some(Justify::SpaceBetween));
        assert_eq!(props.align_items, Some(Align::Center));
        assert_eq!(props.min_height, Some(66.0));
        assert_eq!(props.width, Some(Length::Percent(100.0)));
        assert_eq!(props.box_shadow, None);
    }

    #[test]
    fn clickable_row_lifts_on_hover() {
        let row = ListItem::new().clickable(true);
        let idle = row.props(&theme(), Interaction::empty());
        let hovered = row.props(&theme(), Interaction::HOVERED);
        assert_eq!(idle.cursor, None);
        assert_eq!(hovered.cursor, Some(Cursor::Pointer));
        assert_eq!(hovered.box_shadow, Some(hover_shadow()));
    }

    #[test]
    fn plain_row_does_not_lift_on_hover() {
        let props = ListItem::new().props(&theme(), Interaction::HOVERED);
        assert_eq!(props.box_shadow, None);
        assert_eq!(props.cursor, None);
    }

    #[test]
    fn hover_actions_follow_row_hover() {
        let t = theme();
        assert_eq!(
            HoverActions.props(&t, Interaction::empty()).display,
            Some(Display::None)
        );
        assert_eq!(
            HoverActions.props(&t, Interaction::HOVERED).display,
            Some(Display::Block)
        );
    }

    #[test]
    fn padded_slots_share_spacing() {
        let t = theme();
        let expected = Sides::symmetric(t.resolve_space(PY), t.resolve_space(PX));
        assert_eq!(Right.props(&t, Interaction::empty()).padding, expected);
        assert_eq!(Content::new().props(&t, Interaction::empty()).padding, expected);
        assert_eq!(Actions.props(&t, Interaction::empty()).padding, expected);
    }

    #[test]
    fn info_is_muted() {
        let t = theme();
        let props = Info.props(&t, Interaction::empty());
        assert_eq!(props.color, t.color("grays.4"));
        assert_eq!(props.padding.top, t.resolve_space(1));
    }

    #[test]
    fn link_has_separator_and_hover_background() {
        let t = theme();
        let idle = Link.props(&t, Interaction::empty());
        assert_eq!(idle.border_left.map(|b| b.color), t.color("grays.2"));
        assert_eq!(idle.align_self, Some(Align::Stretch));
        assert_eq!(idle.background, None);
        let hovered = Link.props(&t, Interaction::HOVERED);
        assert_eq!(hovered.background, t.color("grays.0"));
    }

    #[test]
    fn linked_content_highlights_heading() {
        let t = theme();
        let linked = Content::new().linked(true);
        assert_eq!(
            linked.props(&t, Interaction::empty()).text_decoration,
            Some(TextDecoration::None)
        );
        assert_eq!(linked.heading_props(&t, Interaction::HOVERED).color, t.color("blue"));
        assert_eq!(linked.heading_props(&t, Interaction::empty()).color, None);
        assert_eq!(
            Content::new().heading_props(&t, Interaction::HOVERED).color,
            None
        );
    }

    #[test]
    fn lone_hover_actions_pushed_right() {
        assert_eq!(
            Actions.hover_actions_props(true).margin_left,
            Some(Length::Auto)
        );
        assert_eq!(Actions.hover_actions_props(false).margin_left, None);
    }

    #[test]
    fn column_and_left() {
        let t = theme();
        assert_eq!(
            Column.props(&t, Interaction::empty()).display,
            Some(Display::InlineBlock)
        );
        assert_eq!(
            Left.props(&t, Interaction::empty()).justify_content,
            Some(Justify::Center)
        );
    }
}
