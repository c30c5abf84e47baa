//! Application layer: the state behind one console display.
//!
//! # Modules
//!
//! - [`state`]: Current response, ASCII mode flag and view model computation

pub mod state;

pub use state::DisplayState;
