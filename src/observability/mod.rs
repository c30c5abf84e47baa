//! Logging and tracing.
//!
//! Events go to stderr through `tracing-subscriber`. When a trace file is
//! configured, spans are also exported through OpenTelemetry to a local file
//! in OTLP JSON format:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! # Configuration
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"warn"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Size-rotated trace file

pub mod file_writer;
mod init;
pub mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_LEVEL};
