//! Domain layer for linedisplay.
//!
//! Holds the line renderer and the response layout that feeds it. Nothing in
//! here knows about terminals, markup or files; output surfaces live in
//! [`crate::ui`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`line`]: Styling a single line from its position and the mode flag
//! - [`document`]: Splitting a response into lines
//!
//! # Examples
//!
//! ```
//! use linedisplay::domain::{render_line, LineProps};
//!
//! let styled = render_line(LineProps::new(2, "Room 1", 3, true));
//! assert_eq!(styled.class_name(), "line");
//! ```

pub mod document;
pub mod error;
pub mod line;

pub use document::{layout, render_response};
pub use error::{LineDisplayError, Result};
pub use line::{is_ascii_line, render_line, LineProps, StyleClass, StyledText, TRAILING_TEXT_LINES};
