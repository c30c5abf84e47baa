//! Error types for linedisplay.
//!
//! Line rendering itself cannot fail. This module defines [`LineDisplayError`]
//! for the layers around it (theme and configuration loading, reading input,
//! writing output) and a [`Result`] alias used throughout the crate.

use thiserror::Error;

/// The main error type for linedisplay operations.
///
/// # Examples
///
/// ```
/// use linedisplay::LineDisplayError;
///
/// fn load_theme() -> Result<(), LineDisplayError> {
///     Err(LineDisplayError::Theme("unknown theme `neon`".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LineDisplayError {
    /// Reading input, writing output or touching the trace file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The configuration file or a command-line value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serializing styled lines to JSON failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized `Result` type for linedisplay operations.
pub type Result<T> = std::result::Result<T, LineDisplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, LineDisplayError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }

    #[test]
    fn message_variants_prefix_their_kind() {
        let err = LineDisplayError::Config("unknown format `svg`".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown format `svg`");
    }
}
