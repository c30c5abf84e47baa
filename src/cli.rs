//! CLI argument parsing

use crate::infrastructure::expand_tilde;
use crate::{Config, OutputFormat, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Render a game console response line by line
#[derive(Parser, Debug)]
#[command(name = "linedisplay")]
#[command(version)]
#[command(about = "Render game console responses with ASCII-art aware styling")]
pub struct Cli {
    /// File holding the response; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Style lines above the trailing prose block as ASCII art
    #[arg(short, long, overrides_with = "no_ascii")]
    pub ascii: bool,

    /// Turn ASCII mode off even if the configuration file enables it
    #[arg(long, overrides_with = "ascii")]
    pub no_ascii: bool,

    /// Output format (ansi, html, json, plain)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Built-in theme name
    #[arg(long)]
    pub theme: Option<String>,

    /// Custom TOML theme file (overrides --theme)
    #[arg(long)]
    pub theme_file: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "LINEDISPLAY_CONFIG")]
    pub config: Option<String>,

    /// Tracing filter directive (e.g. debug, linedisplay=trace)
    #[arg(long)]
    pub trace_level: Option<String>,

    /// Export spans as OTLP JSON to this file
    #[arg(long)]
    pub trace_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective configuration: the config file (if any) with
    /// command-line flags on top.
    ///
    /// # Errors
    ///
    /// Fails when the configuration file cannot be loaded.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(expand_tilde(path))?,
            None => Config::default(),
        };

        if self.ascii {
            config.ascii = true;
        } else if self.no_ascii {
            config.ascii = false;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(theme) = &self.theme {
            config.theme_name = Some(theme.clone());
        }
        if let Some(theme_file) = &self.theme_file {
            config.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        if let Some(trace_file) = &self.trace_file {
            config.trace_file = Some(trace_file.clone());
        }

        Ok(config)
    }

    /// Input path, or `None` for stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
            .map(|path| expand_tilde(&path.to_string_lossy()))
    }
}

/// Reads the response from `path`, or from stdin when `path` is `None`.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` rather than
/// failing the run, and the file terminator is removed with
/// [`strip_terminator`].
///
/// # Parameters
///
/// * `path` - Response file, or `None` for stdin
///
/// # Errors
///
/// Returns [`crate::LineDisplayError::Io`] if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading response file");
            read_response(std::fs::File::open(path)?)
        }
        None => {
            tracing::debug!("reading response from stdin");
            read_response(io::stdin().lock())
        }
    }
}

/// Reads a whole response from `reader`, decoding it lossily.
///
/// # Errors
///
/// Returns [`crate::LineDisplayError::Io`] if reading fails.
pub fn read_response<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut response = String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
    strip_terminator(&mut response);
    Ok(response)
}

/// Removes one final `\n` or `\r\n`.
///
/// Files and pipes end with a newline that is not part of the response.
/// Only one is removed: further trailing newlines are empty lines the game
/// meant to show. A lone `\r` is left alone.
///
/// # Example
///
/// ```rust
/// use linedisplay::cli::strip_terminator;
///
/// let mut response = String::from("Room 1\r\n\n");
/// strip_terminator(&mut response);
/// assert_eq!(response, "Room 1\r\n");
/// ```
pub fn strip_terminator(response: &mut String) {
    if response.ends_with('\n') {
        response.pop();
        if response.ends_with('\r') {
            response.pop();
        }
    }
}
