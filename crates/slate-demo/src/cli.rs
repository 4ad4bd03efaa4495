#![forbid(unsafe_code)]

//! Command-line argument parsing for the timeline demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `SLATE_DEMO_*` prefix.

use std::fmt;
use std::path::PathBuf;

use slate::AlertColor;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Slate toast timeline demo

Runs one toast on a virtual clock and prints every lifecycle step.

USAGE:
    slate-demo [OPTIONS]

OPTIONS:
    --duration-ms=N       Auto-dismiss delay, 0 disables (default: 3000)
    --hover-enter-ms=N    Pointer enters the toast at N ms
    --hover-leave-ms=N    Pointer leaves the toast at N ms
    --hide-at-ms=N        Flip the shown intent to false at N ms
    --run-until-ms=N      Stop the clock at N ms (default: 6000)
    --height=N            Measured height reported on attach (default: 56)
    --color=COLOR         'green' (default) or 'red'
    --title=TEXT          Alert title
    --body=TEXT           Alert body (default: 'Changes saved')
    --theme=PATH          Load a JSON theme over the default one
    --format=FORMAT       'text' (default) or 'json'
    --help, -h            Show this help message
    --version, -V         Show version

ENVIRONMENT VARIABLES:
    SLATE_DEMO_DURATION_MS    Override --duration-ms
    SLATE_DEMO_HOVER_ENTER_MS Override --hover-enter-ms
    SLATE_DEMO_HOVER_LEAVE_MS Override --hover-leave-ms
    SLATE_DEMO_HIDE_AT_MS     Override --hide-at-ms
    SLATE_DEMO_RUN_UNTIL_MS   Override --run-until-ms
    SLATE_DEMO_FORMAT         Override --format
    SLATE_LOG                 Log filter (e.g. 'slate_widgets=debug')";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned columns.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl Format {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Auto-dismiss delay in milliseconds (0 = never).
    pub duration_ms: u64,
    /// Pointer enter time.
    pub hover_enter_ms: Option<u64>,
    /// Pointer leave time.
    pub hover_leave_ms: Option<u64>,
    /// Time the shown intent flips to false.
    pub hide_at_ms: Option<u64>,
    /// End of the simulation.
    pub run_until_ms: u64,
    /// Height reported on attach.
    pub height: f32,
    /// Alert severity.
    pub color: AlertColor,
    /// Alert title.
    pub title: Option<String>,
    /// Alert body.
    pub body: String,
    /// Theme document.
    pub theme: Option<PathBuf>,
    /// Output format.
    pub format: Format,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            hover_enter_ms: None,
            hover_leave_ms: None,
            hide_at_ms: None,
            run_until_ms: 6000,
            height: 56.0,
            color: AlertColor::Green,
            title: None,
            body: "Changes saved".into(),
            theme: None,
            format: Format::Text,
        }
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the timeline.
    Run(Opts),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Argument parsing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag nobody knows.
    UnknownArgument(String),
    /// A flag value that does not parse.
    InvalidValue {
        /// Flag or variable name.
        flag: String,
        /// Offending value.
        value: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(
                f,
                "Unknown argument: {arg}\nRun with --help for usage information."
            ),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
        }
    }
}

impl std::error::Error for CliError {}

fn invalid(flag: &str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag: flag.to_owned(),
        value: value.to_owned(),
    }
}

fn parse_ms(flag: &str, value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|_| invalid(flag, value))
}

fn parse_color(flag: &str, value: &str) -> Result<AlertColor, CliError> {
    match value {
        "green" => Ok(AlertColor::Green),
        "red" => Ok(AlertColor::Red),
        _ => Err(invalid(flag, value)),
    }
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        Self::parse_from(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse `args` (without the program name) with `env` as the variable
    /// lookup.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse_from<I, E>(args: I, env: E) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("SLATE_DEMO_DURATION_MS") {
            opts.duration_ms = parse_ms("SLATE_DEMO_DURATION_MS", &val)?;
        }
        if let Some(val) = env("SLATE_DEMO_HOVER_ENTER_MS") {
            opts.hover_enter_ms = Some(parse_ms("SLATE_DEMO_HOVER_ENTER_MS", &val)?);
        }
        if let Some(val) = env("SLATE_DEMO_HOVER_LEAVE_MS") {
            opts.hover_leave_ms = Some(parse_ms("SLATE_DEMO_HOVER_LEAVE_MS", &val)?);
        }
        if let Some(val) = env("SLATE_DEMO_HIDE_AT_MS") {
            opts.hide_at_ms = Some(parse_ms("SLATE_DEMO_HIDE_AT_MS", &val)?);
        }
        if let Some(val) = env("SLATE_DEMO_RUN_UNTIL_MS") {
            opts.run_until_ms = parse_ms("SLATE_DEMO_RUN_UNTIL_MS", &val)?;
        }
        if let Some(val) = env("SLATE_DEMO_FORMAT") {
            opts.format = Format::parse(&val).ok_or_else(|| invalid("SLATE_DEMO_FORMAT", &val))?;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    let Some((flag, val)) = other.split_once('=') else {
                        return Err(CliError::UnknownArgument(other.to_owned()));
                    };
                    match flag {
                        "--duration-ms" => opts.duration_ms = parse_ms(flag, val)?,
                        "--hover-enter-ms" => opts.hover_enter_ms = Some(parse_ms(flag, val)?),
                        "--hover-leave-ms" => opts.hover_leave_ms = Some(parse_ms(flag, val)?),
                        "--hide-at-ms" => opts.hide_at_ms = Some(parse_ms(flag, val)?),
                        "--run-until-ms" => opts.run_until_ms = parse_ms(flag, val)?,
                        "--height" => {
                            opts.height = val
                                .parse::<f32>()
                                .ok()
                                .filter(|h| h.is_finite() && *h >= 0.0)
                                .ok_or_else(|| invalid(flag, val))?;
                        }
                        "--color" => opts.color = parse_color(flag, val)?,
                        "--title" => opts.title = Some(val.to_owned()),
                        "--body" => opts.body = val.to_owned(),
                        "--theme" => opts.theme = Some(PathBuf::from(val)),
                        "--format" => {
                            opts.format = Format::parse(val).ok_or_else(|| invalid(flag, val))?;
                        }
                        _ => return Err(CliError::UnknownArgument(other.to_owned())),
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}
