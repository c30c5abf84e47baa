//! View model types representing renderable display state.
//!
//! View models are computed by [`crate::app::DisplayState::compute_viewmodel`]
//! and consumed by the renderer. They hold display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use linedisplay::ui::{EmptyState, UIViewModel};
//!
//! let vm = UIViewModel {
//!     lines: linedisplay::render_response("Room 1\nNo items.\nNo monsters.", true),
//!     empty_state: None,
//! };
//! assert_eq!(vm.lines.len(), 3);
//! ```

use crate::domain::StyledText;

/// Complete view model for one frame of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Styled lines of the current response, in display order.
    pub lines: Vec<StyledText>,

    /// Set when there is no response to show.
    pub empty_state: Option<EmptyState>,
}

impl UIViewModel {
    /// Number of lines carrying the ASCII-art style.
    #[must_use]
    pub fn ascii_line_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.has_class(crate::domain::StyleClass::AsciiLine))
            .count()
    }
}

/// Message shown when nothing has been displayed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}
