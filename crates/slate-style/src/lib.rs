#![forbid(unsafe_code)]

//! Style: colors, theme scales, and the property bags handed to the
//! presentation surface.

pub mod color;
pub mod props;
pub mod theme;

pub use color::{Color, ColorParseError};
pub use props::{
    Align, BorderSide, BoxProps, Cursor, Display, Interaction, Justify, Length, Shadow, Sides,
    TextDecoration, Transition,
};
pub use theme::{Theme, ThemeBuilder, ThemeError};
