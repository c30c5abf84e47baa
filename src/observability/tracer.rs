//! OpenTelemetry tracer provider that exports spans to a local file.

use super::file_writer::RotatingFile;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes every exported batch as one OTLP JSON line.
///
/// Implements the SDK's `SpanExporter` on top of [`RotatingFile`] and
/// [`SpanFormatter`].
struct FileSpanExporter {
    /// Rotated trace file.
    file: RotatingFile,
    /// OTLP JSON encoder.
    formatter: SpanFormatter,
    /// Set by `shutdown`; later exports fail.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("file exporter is shut down"));
        }

        let line = serde_json::to_string(&self.formatter.format_batch(batch))
            .map_err(|e| TraceError::from(e.to_string()))?;

        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch as a single line.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the line was written
    /// - `Err(TraceError)` if the exporter is shut down, encoding fails or the
    ///   file cannot be written
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider that writes spans to `path` as they end.
///
/// # Parameters
///
/// * `path` - Trace file; its directory must already exist
/// * `resource` - Resource attributes recorded with every span
///
/// # Returns
///
/// A `TracerProvider` ready for `tracing-opentelemetry`.
///
/// Uses the simple (unbatched) processor: each span is exported when it
/// closes, so nothing is lost if the process exits right after rendering.
#[must_use]
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
