#![forbid(unsafe_code)]

//! Toast timeline demo: drives one toast through a scripted sequence of host
//! events on a virtual clock and reports every lifecycle step.

pub mod cli;
pub mod scenario;

use std::fmt;

use slate::Theme;

use crate::cli::{Format, Opts};

/// Failure while running the demo.
#[derive(Debug)]
pub enum DemoError {
    /// Theme loading failed.
    Slate(slate::Error),
    /// JSON rendering failed.
    Json(serde_json::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slate(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "cannot render report: {err}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Slate(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<slate::Error> for DemoError {
    fn from(err: slate::Error) -> Self {
        Self::Slate(err)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Load the theme, run the scenario, and render it in the chosen format.
pub fn run(opts: &Opts) -> Result<String, DemoError> {
    let theme = match &opts.theme {
        Some(path) => slate::load_theme(path)?,
        None => Theme::default(),
    };
    let report = scenario::run(opts, &theme);
    match opts.format {
        Format::Text => Ok(scenario::render_text(&report)),
        Format::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}
