#![forbid(unsafe_code)]

//! Property bags for the presentation surface.
//!
//! A [`BoxProps`] is the resolved description of one box: layout, spacing,
//! typography and decoration, with theme lookups already applied. The
//! presentation surface decides how to paint it. Unset fields inherit.

use std::time::Duration;

use bitflags::bitflags;

use crate::color::Color;

/// Outer display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Block box.
    #[default]
    Block,
    /// Flex container.
    Flex,
    /// Inline block.
    InlineBlock,
    /// Not rendered.
    None,
}

/// Main-axis distribution inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Pack in the center.
    Center,
    /// Pack at the end.
    End,
    /// First and last item on the edges, equal space between.
    SpaceBetween,
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Align to the cross start.
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the cross end.
    End,
    /// Fill the cross axis.
    Stretch,
}

/// A length along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute layout units.
    Px(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Take the remaining space (margins only).
    Auto,
}

/// Pointer cursor shown over a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default.
    #[default]
    Default,
    /// Hand cursor for clickable content.
    Pointer,
}

/// Text decoration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    /// No line.
    None,
    /// Underline.
    Underline,
}

/// Per-side values (padding, margins).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    /// Top side.
    pub top: f32,
    /// Right side.
    pub right: f32,
    /// Bottom side.
    pub bottom: f32,
    /// Left side.
    pub left: f32,
}

impl Sides {
    /// The same value on every side.
    #[must_use]
    pub const fn all(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Vertical and horizontal values.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Sum of left and right.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// One border edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSide {
    /// Line width.
    pub width: f32,
    /// Line color.
    pub color: Color,
}

/// A drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
    /// Blur radius.
    pub blur: f32,
    /// Spread radius.
    pub spread: f32,
    /// Shadow color.
    pub color: Color,
}

/// A property transition the surface should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Animated property name, as the surface knows it.
    pub property: &'static str,
    /// Transition length.
    pub duration: Duration,
}

bitflags! {
    /// Pointer and focus state of a box, reported by the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Interaction: u8 {
        /// The pointer is over the box.
        const HOVERED = 0b0000_0001;
        /// The box has keyboard focus.
        const FOCUSED = 0b0000_0010;
        /// The box is being pressed.
        const PRESSED = 0b0000_0100;
    }
}

/// Resolved presentation properties for one box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxProps {
    /// Display mode.
    pub display: Option<Display>,
    /// Flex main-axis distribution.
    pub justify_content: Option<Justify>,
    /// Flex cross-axis alignment of children.
    pub align_items: Option<Align>,
    /// Cross-axis alignment of this box inside its parent.
    pub align_self: Option<Align>,
    /// Flex grow factor.
    pub flex: Option<f32>,
    /// Width.
    pub width: Option<Length>,
    /// Minimum height.
    pub min_height: Option<f32>,
    /// Inner spacing.
    pub padding: Sides,
    /// Left margin (used for `auto` push-right).
    pub margin_left: Option<Length>,
    /// Font size in layout units.
    pub font_size: Option<f32>,
    /// Font weight (100–900).
    pub font_weight: Option<u16>,
    /// Text color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Left border.
    pub border_left: Option<BorderSide>,
    /// Drop shadow.
    pub box_shadow: Option<Shadow>,
    /// Cursor.
    pub cursor: Option<Cursor>,
    /// Text decoration.
    pub text_decoration: Option<TextDecoration>,
    /// Animated property.
    pub transition: Option<Transition>,
}

impl BoxProps {
    /// Empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flex container centering its children on both axes.
    #[must_use]
    pub fn centered_flex() -> Self {
        Self::new()
            .display(Display::Flex)
            .align_items(Align::Center)
            .justify_content(Justify::Center)
    }

    #[must_use]
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    #[must_use]
    pub fn justify_content(mut self, justify: Justify) -> Self {
        self.justify_content = Some(justify);
        self
    }

    #[must_use]
    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    #[must_use]
    pub fn align_self(mut self, align: Align) -> Self {
        self.align_self = Some(align);
        self
    }

    #[must_use]
    pub fn flex(mut self, grow: f32) -> Self {
        self.flex = Some(grow);
        self
    }

    #[must_use]
    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Set the whole padding.
    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Set left and right padding.
    #[must_use]
    pub fn px(mut self, v: f32) -> Self {
        self.padding.left = v;
        self.padding.right = v;
        self
    }

    /// Set top and bottom padding.
    #[must_use]
    pub fn py(mut self, v: f32) -> Self {
        self.padding.top = v;
        self.padding.bottom = v;
        self
    }

    /// Set top padding.
    #[must_use]
    pub fn pt(mut self, v: f32) -> Self {
        self.padding.top = v;
        self
    }

    #[must_use]
    pub fn margin_left(mut self, margin: Length) -> Self {
        self.margin_left = Some(margin);
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn border_left(mut self, border: BorderSide) -> Self {
        self.border_left = Some(border);
        self
    }

    #[must_use]
    pub fn box_shadow(mut self, shadow: Shadow) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    #[must_use]
    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    #[must_use]
    pub fn transition(mut self, property: &'static str, duration: Duration) -> Self {
        self.transition = Some(Transition { property, duration });
        self
    }

    /// Overlay every field set in `other` onto `self`.
    ///
    /// Padding is replaced as a whole when `other` has any non-zero side.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            display,
            justify_content,
            align_items,
            align_self,
            flex,
            width,
            min_height,
            margin_left,
            font_size,
            font_weight,
            color,
            background,
            border_left,
            box_shadow,
            cursor,
            text_decoration,
            transition,
        );
        if other.padding != Sides::default() {
            self.padding = other.padding;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_py_set_opposite_sides() {
        let props = BoxProps::new().px(16.0).py(12.0);
        assert_eq!(props.padding, Sides::symmetric(12.0, 16.0));
        assert_eq!(props.padding.horizontal(), 32.0);
        assert_eq!(props.padding.vertical(), 24.0);
    }

    #[test]
    fn pt_only_touches_top() {
        let props = BoxProps::new().pt(4.0);
        assert_eq!(props.padding.top, 4.0);
        assert_eq!(props.padding.bottom, 0.0);
    }

    #[test]
    fn centered_flex_defaults() {
        let props = BoxProps::centered_flex();
        assert_eq!(props.display, Some(Display::Flex));
        assert_eq!(props.align_items, Some(Align::Center));
        assert_eq!(props.justify_content, Some(Justify::Center));
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let base = BoxProps::new().display(Display::Flex).min_height(66.0).px(8.0);
        let hover = BoxProps::new().cursor(Cursor::Pointer);
        let merged = base.clone().merge(&hover);
        assert_eq!(merged.display, Some(Display::Flex));
        assert_eq!(merged.min_height, Some(66.0));
        assert_eq!(merged.cursor, Some(Cursor::Pointer));
        assert_eq!(merged.padding, base.padding);
    }

    #[test]
    fn interaction_flags_compose() {
        let state = Interaction::HOVERED | Interaction::FOCUSED;
        assert!(state.contains(Interaction::HOVERED));
        assert!(!state.contains(Interaction::PRESSED));
        assert!(Interaction::default().is_empty());
    }
}
