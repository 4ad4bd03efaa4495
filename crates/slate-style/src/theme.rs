#![forbid(unsafe_code)]

//! Theme scales and key lookup.
//!
//! Components describe colors and spacing by theme key rather than by
//! value: `"grays.4"` is the fifth entry of the `grays` scale, `"blue"` a
//! single named color, and spacing step `5` the sixth entry of the space
//! scale. The theme turns those keys into concrete values.
//!
//! # Example
//! ```
//! use slate_style::theme::Theme;
//!
//! let theme = Theme::default();
//! let muted = theme.color("grays.4").unwrap();
//! let gutter = theme.space(5).unwrap();
//! assert!(gutter > 0.0);
//! # let _ = muted;
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::color::{Color, ColorParseError};

/// A named color or an indexed color scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Swatch {
    /// A single color.
    Single(Color),
    /// An ordered scale, lightest first.
    Scale(Vec<Color>),
}

/// A theme with named colors and numeric scales.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: BTreeMap<String, Swatch>,
    space: Vec<f32>,
    font_sizes: Vec<f32>,
    font_weights: Vec<u16>,
}

impl Default for Theme {
    fn default() -> Self {
        themes::light()
    }
}

impl Theme {
    /// Create a new theme builder starting from an empty theme.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Resolve a color key: `"name"` or `"scale.index"`.
    ///
    /// A bare scale name resolves to the scale's first entry.
    #[must_use]
    pub fn color(&self, key: &str) -> Option<Color> {
        let (name, index) = match key.split_once('.') {
            Some((name, idx)) => (name, Some(idx.parse::<usize>().ok()?)),
            None => (key, None),
        };
        match (self.colors.get(name)?, index) {
            (Swatch::Single(color), None) => Some(*color),
            (Swatch::Single(_), Some(_)) => None,
            (Swatch::Scale(scale), idx) => scale.get(idx.unwrap_or(0)).copied(),
        }
    }

    /// Spacing scale step.
    #[must_use]
    pub fn space(&self, step: usize) -> Option<f32> {
        self.space.get(step).copied()
    }

    /// Font size scale step.
    #[must_use]
    pub fn font_size(&self, step: usize) -> Option<f32> {
        self.font_sizes.get(step).copied()
    }

    /// Font weight scale step.
    #[must_use]
    pub fn font_weight(&self, step: usize) -> Option<u16> {
        self.font_weights.get(step).copied()
    }

    /// Like [`color`](Self::color), falling back to transparent for unknown keys.
    #[must_use]
    pub fn resolve_color(&self, key: &str) -> Color {
        self.color(key).unwrap_or(Color::TRANSPARENT)
    }

    /// Like [`space`](Self::space), treating out-of-scale steps as raw units.
    #[must_use]
    pub fn resolve_space(&self, step: usize) -> f32 {
        self.space(step).unwrap_or(step as f32)
    }

    /// Like [`font_size`](Self::font_size), treating out-of-scale steps as raw units.
    #[must_use]
    pub fn resolve_font_size(&self, step: usize) -> f32 {
        self.font_size(step).unwrap_or(step as f32)
    }

    /// Like [`font_weight`](Self::font_weight), defaulting to regular weight.
    #[must_use]
    pub fn resolve_font_weight(&self, step: usize) -> u16 {
        self.font_weight(step).unwrap_or(400)
    }

    /// Parse a theme from JSON.
    ///
    /// ```json
    /// {
    ///   "colors": { "blue": "#1f6feb", "grays": ["#f6f8fa", "#eaeef2"] },
    ///   "space": [0, 4, 8],
    ///   "font_sizes": [12, 14],
    ///   "font_weights": [400, 600]
    /// }
    /// ```
    ///
    /// Missing scales are taken from the default theme.
    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> Result<Self, ThemeError> {
        let doc: document::ThemeDocument = serde_json::from_str(input).map_err(ThemeError::Json)?;
        doc.into_theme()
    }
}

/// Builder for [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    colors: BTreeMap<String, Swatch>,
    space: Vec<f32>,
    font_sizes: Vec<f32>,
    font_weights: Vec<u16>,
}

impl ThemeBuilder {
    /// Start from an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            colors: theme.colors.clone(),
            space: theme.space.clone(),
            font_sizes: theme.font_sizes.clone(),
            font_weights: theme.font_weights.clone(),
        }
    }

    /// Add or replace a single named color.
    pub fn color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), Swatch::Single(color));
        self
    }

    /// Add or replace a color scale.
    pub fn scale(mut self, name: impl Into<String>, colors: Vec<Color>) -> Self {
        self.colors.insert(name.into(), Swatch::Scale(colors));
        self
    }

    /// Replace the spacing scale.
    pub fn space(mut self, space: Vec<f32>) -> Self {
        self.space = space;
        self
    }

    /// Replace the font size scale.
    pub fn font_sizes(mut self, sizes: Vec<f32>) -> Self {
        self.font_sizes = sizes;
        self
    }

    /// Replace the font weight scale.
    pub fn font_weights(mut self, weights: Vec<u16>) -> Self {
        self.font_weights = weights;
        self
    }

    /// Build the theme.
    pub fn build(self) -> Theme {
        Theme {
            colors: self.colors,
            space: self.space,
            font_sizes: self.font_sizes,
            font_weights: self.font_weights,
        }
    }
}

/// Error produced while loading a theme.
#[derive(Debug)]
pub enum ThemeError {
    /// The document is not valid JSON or has the wrong shape.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// A color entry could not be parsed.
    InvalidColor {
        /// Theme key of the entry.
        key: String,
        /// Underlying parse error.
        source: ColorParseError,
    },
    /// A color scale has no entries.
    EmptyScale(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(err) => write!(f, "theme is not valid JSON: {err}"),
            Self::InvalidColor { key, source } => write!(f, "color {key:?}: {source}"),
            Self::EmptyScale(key) => write!(f, "color scale {key:?} is empty"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Json(err) => Some(err),
            Self::InvalidColor { source, .. } => Some(source),
            Self::EmptyScale(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
mod document {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    use super::{Theme, ThemeBuilder, ThemeError};
    use crate::color::Color;

    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub(super) enum SwatchEntry {
        Single(String),
        Scale(Vec<String>),
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct ThemeDocument {
        #[serde(default)]
        colors: BTreeMap<String, SwatchEntry>,
        space: Option<Vec<f32>>,
        font_sizes: Option<Vec<f32>>,
        font_weights: Option<Vec<u16>>,
    }

    fn parse(key: &str, value: &str) -> Result<Color, ThemeError> {
        Color::from_hex(value).map_err(|source| ThemeError::InvalidColor {
            key: key.to_owned(),
            source,
        })
    }

    impl ThemeDocument {
        pub(super) fn into_theme(self) -> Result<Theme, ThemeError> {
            let defaults = Theme::default();
            let mut builder = ThemeBuilder::from_theme(&defaults);
            for (name, swatch) in self.colors {
                builder = match swatch {
                    SwatchEntry::Single(value) => {
                        let color = parse(&name, &value)?;
                        builder.color(name, color)
                    }
                    SwatchEntry::Scale(values) => {
                        if values.is_empty() {
                            return Err(ThemeError::EmptyScale(name));
                        }
                        let colors = values
                            .iter()
                            .enumerate()
                            .map(|(i, v)| parse(&format!("{name}.{i}"), v))
                            .collect::<Result<Vec<_>, _>>()?;
                        builder.scale(name, colors)
                    }
                };
            }
            if let Some(space) = self.space {
                builder = builder.space(space);
            }
            if let Some(sizes) = self.font_sizes {
                builder = builder.font_sizes(sizes);
            }
            if let Some(weights) = self.font_weights {
                builder = builder.font_weights(weights);
            }
            Ok(builder.build())
        }
    }
}

/// Built-in themes.
pub mod themes {
    use super::Theme;
    use crate::color::Color;

    /// The default light theme.
    #[must_use]
    pub fn light() -> Theme {
        Theme::builder()
            .scale(
                "grays",
                vec![
                    Color::rgb(0xf6, 0xf8, 0xfa),
                    Color::rgb(0xea, 0xee, 0xf2),
                    Color::rgb(0xd0, 0xd7, 0xde),
                    Color::rgb(0xaf, 0xb8, 0xc1),
                    Color::rgb(0x8c, 0x95, 0x9f),
                    Color::rgb(0x6e, 0x77, 0x81),
                    Color::rgb(0x57, 0x60, 0x6a),
                    Color::rgb(0x24, 0x29, 0x2f),
                ],
            )
            .color("blue", Color::rgb(0x09, 0x69, 0xda))
            .color("green", Color::rgb(0x1a, 0x7f, 0x37))
            .color("red", Color::rgb(0xcf, 0x22, 0x2e))
            .color("white", Color::WHITE)
            .color("black", Color::BLACK)
            .space(vec![0.0, 4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0])
            .font_sizes(vec![12.0, 14.0, 16.0, 20.0, 24.0, 32.0])
            .font_weights(vec![400, 600, 700])
            .build()
    }
}
