//! Theme management and ANSI escape sequence generation.
//!
//! A theme assigns colors to the two line classes and to the empty-state
//! message. Built-in themes are embedded at compile time; custom themes are
//! loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! line_fg = "#cdd6f4"
//! # line_bg = "#1e1e2e"
//! ascii_fg = "#a6e3a1"
//! # ascii_bg = "#1e1e2e"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{LineDisplayError, Result, StyleClass};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: &[&str] = &["catppuccin-mocha", "catppuccin-latte"];

/// Color scheme for rendering lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Foreground of plain `line` entries.
    pub line_fg: String,
    #[serde(default)]
    pub line_bg: Option<String>,

    /// Foreground of `ascii-line` entries.
    pub ascii_fg: String,
    #[serde(default)]
    pub ascii_bg: Option<String>,

    /// Color of the message shown when there is nothing to display.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linedisplay::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LineDisplayError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            LineDisplayError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            LineDisplayError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Opening escape sequence for a line with the given class.
    #[must_use]
    pub fn style_for(&self, class: StyleClass) -> String {
        let (fg, bg) = match class {
            StyleClass::Line => (&self.colors.line_fg, self.colors.line_bg.as_ref()),
            StyleClass::AsciiLine => (&self.colors.ascii_fg, self.colors.ascii_bg.as_ref()),
        };

        let mut style = Self::fg(fg);
        if let Some(bg) = bg {
            style.push_str(&Self::bg(bg));
        }
        style
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);

        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return WHITE;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => (r, g, b),
            _ => WHITE,
        }
    }

    /// 24-bit foreground escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
