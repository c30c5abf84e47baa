//! linedisplay: line-by-line rendering of game console responses.
//!
//! A text-adventure console sends each response as one block of text: an
//! optional ASCII-art banner followed by a few lines of prose (where you are,
//! what items lie around, which monsters are present). This crate splits a
//! response into lines and styles each one:
//!
//! - every line gets the `line` class
//! - while ASCII mode is on, lines above the last
//!   [`TRAILING_TEXT_LINES`] also get `ascii-line`
//!
//! The styled lines are then written to a terminal (truecolor ANSI), as HTML
//! paragraphs, as JSON records or as plain text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs, cli)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Response + mode flag
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!              │                          │
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │ Domain (domain/)        │   │ UI Layer (ui/)          │
//! │ - Line renderer         │   │ - ANSI / HTML / JSON    │
//! │ - Response layout       │   │ - Theming               │
//! │ - Errors                │   │                         │
//! └─────────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Paths (infrastructure/)                          │
//! │  - tracing + OTLP file export (observability/)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Line renderer, response layout, errors
//! - [`app`]: Display state and view model computation
//! - [`ui`]: Output surfaces and themes
//! - [`infrastructure`]: Tilde expansion and data directory
//! - [`observability`]: Tracing subscriber and OTLP file export
//! - [`cli`]: Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use linedisplay::{render_line, LineProps};
//!
//! let art = render_line(LineProps::new(0, "  /\\_/\\", 10, true));
//! assert_eq!(art.class_name(), "line ascii-line");
//!
//! let prose = render_line(LineProps::new(8, "No items present.", 10, true));
//! assert_eq!(prose.class_name(), "line");
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::DisplayState;
pub use domain::{
    is_ascii_line, layout, render_line, render_response, LineDisplayError, LineProps, Result,
    StyleClass, StyledText, TRAILING_TEXT_LINES,
};
pub use ui::{OutputFormat, Theme};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Loaded from an optional TOML file and overridden by command-line flags.
///
/// # Example
///
/// ```toml
/// ascii = true
/// format = "html"
/// theme = "catppuccin-latte"
/// # theme_file = "~/.config/linedisplay/theme.toml"
/// trace_level = "debug"
/// trace_file = "otlp.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start with ASCII mode on.
    pub ascii: bool,

    /// Output surface.
    pub format: OutputFormat,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `"debug"` or `"linedisplay=trace"`.
    pub trace_level: Option<String>,

    /// Where to export OTLP JSON spans. Bare file names go to the data
    /// directory.
    pub trace_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LineDisplayError::Config`] if the file cannot be read, is not
    /// valid TOML, or contains unknown keys or wrongly typed values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LineDisplayError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            LineDisplayError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Creates the display state described by `config`.
///
/// # Example
///
/// ```rust
/// use linedisplay::{initialize, Config};
///
/// let config = Config { ascii: true, ..Config::default() };
/// let state = initialize(&config);
/// assert!(state.ascii);
/// assert_eq!(state.theme.name, "catppuccin-mocha");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> DisplayState {
    tracing::debug!(format = %config.format, ascii = config.ascii, "initializing display");

    let mut state = DisplayState::new(config.load_theme());
    state.set_ascii(config.ascii);
    state
}
