//! Output layer: turns view models into terminal, HTML, JSON or plain text.
//!
//! # Architecture
//!
//! ```text
//! DisplayState → compute_viewmodel → UIViewModel → render → Write
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Format selection and the render entry point
//! - [`components`]: One renderer per output format
//! - [`helpers`]: ANSI stripping and HTML escaping
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, OutputFormat};
pub use theme::Theme;
pub use viewmodel::{EmptyState, UIViewModel};
