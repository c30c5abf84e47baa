//! Display state and view model computation.
//!
//! [`DisplayState`] holds the response currently on screen, the ASCII mode
//! flag and the theme. Styled lines are derived on demand; nothing derived is
//! stored, so changing the flag restyles the same response.
//!
//! # Example
//!
//! ```rust
//! use linedisplay::app::DisplayState;
//! use linedisplay::Theme;
//!
//! let mut state = DisplayState::new(Theme::default());
//! state.set_response("/\\\n\\/\nYou are in Room 1\nNo items.\nNo monsters.");
//! state.set_ascii(true);
//!
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.ascii_line_count(), 2);
//! ```

use crate::domain::render_response;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, UIViewModel};

/// Message shown before any response has been set.
pub const EMPTY_MESSAGE: &str = "Nothing to display";

/// State of one console display.
///
/// Separates what was received (the raw response) from how it is shown (the
/// ASCII flag and theme). The styled lines are recomputed by
/// [`compute_viewmodel`](Self::compute_viewmodel) on each call.
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Response currently shown, if any.
    ///
    /// Stored exactly as received; splitting into lines happens during view
    /// model computation.
    pub response: Option<String>,

    /// Whether ASCII mode is on.
    ///
    /// When `true`, every line above the last three gets the `ascii-line`
    /// class.
    pub ascii: bool,

    /// Color scheme for the ANSI surface.
    pub theme: Theme,
}

impl DisplayState {
    /// Creates an empty display with ASCII mode off.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for the ANSI surface
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            response: None,
            ascii: false,
            theme,
        }
    }

    /// Replaces the response on screen.
    ///
    /// # Parameters
    ///
    /// * `text` - Full response; lines are separated by `'\n'`
    pub fn set_response(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(bytes = text.len(), "response replaced");
        self.response = Some(text);
    }

    /// Removes the response; the next view model shows the empty state.
    pub fn clear(&mut self) {
        tracing::debug!("display cleared");
        self.response = None;
    }

    /// Sets ASCII mode.
    ///
    /// # Parameters
    ///
    /// * `ascii` - `true` to style art lines with `ascii-line`
    pub fn set_ascii(&mut self, ascii: bool) {
        self.ascii = ascii;
    }

    /// Flips ASCII mode.
    ///
    /// # Returns
    ///
    /// The new value of the flag.
    pub fn toggle_ascii(&mut self) -> bool {
        self.ascii = !self.ascii;
        tracing::debug!(ascii = self.ascii, "ascii mode toggled");
        self.ascii
    }

    /// Computes the view model for the current response and mode.
    ///
    /// # Returns
    ///
    /// - With a response: its styled lines and no empty state
    /// - Without one: no lines and an empty state carrying [`EMPTY_MESSAGE`]
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        self.response.as_deref().map_or_else(
            || UIViewModel {
                lines: Vec::new(),
                empty_state: Some(EmptyState {
                    message: EMPTY_MESSAGE.to_string(),
                }),
            },
            |response| UIViewModel {
                lines: render_response(response, self.ascii),
                empty_state: None,
            },
        )
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
