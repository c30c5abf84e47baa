//! Top-level rendering coordinator.
//!
//! Picks the output component for the requested [`OutputFormat`] and handles
//! the empty state.
//!
//! # Example
//!
//! ```rust
//! use linedisplay::ui::{render, OutputFormat, Theme, UIViewModel};
//!
//! let vm = UIViewModel {
//!     lines: linedisplay::render_response("art\nRoom 1\nNo items.\nNo monsters.", true),
//!     empty_state: None,
//! };
//! let mut out = Vec::new();
//! render(&vm, &Theme::default(), OutputFormat::Html, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).starts_with("<p class=\"line ascii-line\">art</p>"));
//! # Ok::<(), linedisplay::LineDisplayError>(())
//! ```

use crate::domain::{LineDisplayError, Result};
use crate::ui::components::{ansi, html, json, plain};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output surface to render to.
///
/// Configuration files and command-line flags both go through [`FromStr`],
/// so names are matched case-insensitively everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// Colored terminal text.
    #[default]
    Ansi,
    /// `<p class="...">` elements.
    Html,
    /// Array of `{text, classes}` records.
    Json,
    /// Text only.
    Plain,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Html => "html",
            Self::Json => "json",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LineDisplayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(Self::Ansi),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "plain" => Ok(Self::Plain),
            other => Err(LineDisplayError::Config(format!(
                "unknown output format `{other}` (expected ansi, html, json or plain)"
            ))),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = LineDisplayError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Renders a view model to `out` in the given format.
///
/// The empty state is only visible on the ANSI surface; HTML and plain output
/// write nothing and JSON writes `[]`.
///
/// # Errors
///
/// Returns [`LineDisplayError::Io`] when writing fails and
/// [`LineDisplayError::Serialize`] when JSON encoding fails.
pub fn render<W: Write>(vm: &UIViewModel, theme: &Theme, format: OutputFormat, out: &mut W) -> Result<()> {
    let _span = tracing::debug_span!("render", format = %format, lines = vm.lines.len()).entered();

    if let Some(empty) = &vm.empty_state {
        tracing::debug!("rendering empty state");
        match format {
            OutputFormat::Ansi => ansi::render_empty_state(empty, theme, out)?,
            OutputFormat::Json => json::render_lines(&[], out)?,
            OutputFormat::Html | OutputFormat::Plain => {}
        }
        out.flush()?;
        return Ok(());
    }

    match format {
        OutputFormat::Ansi => ansi::render_lines(&vm.lines, theme, out)?,
        OutputFormat::Html => html::render_lines(&vm.lines, out)?,
        OutputFormat::Json => json::render_lines(&vm.lines, out)?,
        OutputFormat::Plain => plain::render_lines(&vm.lines, out)?,
    }
    out.flush()?;

    tracing::debug!(ascii_lines = vm.ascii_line_count(), "render complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::EmptyState;

    fn empty_vm() -> UIViewModel {
        UIViewModel {
            lines: Vec::new(),
            empty_state: Some(EmptyState {
                message: "Nothing to display".to_string(),
            }),
        }
    }

    #[test]
    fn formats_parse_case_insensitively() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "svg".parse::<OutputFormat>(),
            Err(LineDisplayError::Config(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in [OutputFormat::Ansi, OutputFormat::Html, OutputFormat::Json, OutputFormat::Plain] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn empty_state_per_format() {
        let theme = Theme::default();
        let mut html = Vec::new();
        render(&empty_vm(), &theme, OutputFormat::Html, &mut html).unwrap();
        assert!(html.is_empty());

        let mut json = Vec::new();
        render(&empty_vm(), &theme, OutputFormat::Json, &mut json).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), "[]\n");

        let mut ansi = Vec::new();
        render(&empty_vm(), &theme, OutputFormat::Ansi, &mut ansi).unwrap();
        assert!(String::from_utf8(ansi).unwrap().contains("Nothing to display"));
    }
}
