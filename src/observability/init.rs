//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::resolve_trace_file;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the filter directive: `RUST_LOG`, then `trace_level`, then
/// [`DEFAULT_LEVEL`].
fn filter_directive(env_value: Option<String>, config: &Config) -> String {
    env_value
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Installs the global tracing subscriber.
///
/// Always logs to stderr. When `config.trace_file` is set, spans are also
/// exported as OTLP JSON to that file (bare file names go to the data
/// directory). Failing to prepare the trace directory only drops the file
/// export; an invalid directive falls back to [`DEFAULT_LEVEL`]. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn init_tracing(config: &Config) {
    let directive = filter_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let otel_layer = config.trace_file.as_deref().and_then(|configured| {
        let path = resolve_trace_file(configured);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).ok()?;
        }

        let resource = Resource::new(vec![opentelemetry::KeyValue::new(
            "service.name",
            "linedisplay",
        )]);
        let provider = tracer::create_tracer_provider(path, resource);
        Some(OpenTelemetryLayer::new(provider.tracer("linedisplay")))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();

    tracing::debug!(directive = %directive, "tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_config() {
        let config = Config {
            trace_level: Some("info".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_directive(Some("debug".to_string()), &config), "debug");
        assert_eq!(filter_directive(Some("  ".to_string()), &config), "info");
        assert_eq!(filter_directive(None, &Config::default()), DEFAULT_LEVEL);
    }
}
