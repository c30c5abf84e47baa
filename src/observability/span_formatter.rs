//! OTLP JSON encoding of exported spans.
//!
//! Each batch becomes one `{"resourceSpans": [...]}` document matching the
//! OTLP/JSON protocol encoding: ids as lowercase hex, timestamps as decimal
//! nanosecond strings, 64-bit integers as strings.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "linedisplay";

/// Top-level OTLP/JSON export document.
///
/// # Format
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": {
///       "attributes": [{"key": "service.name", "value": {"stringValue": "linedisplay"}}]
///     },
///     "scopeSpans": [{
///       "scope": {"name": "linedisplay"},
///       "spans": [...]
///     }]
///   }]
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpDocument {
    pub resource_spans: Vec<ResourceSpans>,
}

/// Spans grouped under the resource that produced them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpans {
    pub resource: OtlpResource,
    pub scope_spans: Vec<ScopeSpans>,
}

/// Resource attributes (service name and the like).
#[derive(Debug, Serialize)]
pub struct OtlpResource {
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct Scope {
    pub name: &'static str,
}

/// Spans emitted under one instrumentation scope.
#[derive(Debug, Serialize)]
pub struct ScopeSpans {
    pub scope: Scope,
    pub spans: Vec<OtlpSpan>,
}

/// A single finished span.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpSpan {
    /// 32 lowercase hex digits.
    pub trace_id: String,
    /// 16 lowercase hex digits.
    pub span_id: String,
    /// Empty for root spans.
    pub parent_span_id: String,
    pub name: String,
    /// Internal = 1, Server = 2, Client = 3, Producer = 4, Consumer = 5.
    pub kind: u8,
    /// Nanoseconds since the Unix epoch, as a decimal string.
    pub start_time_unix_nano: String,
    pub end_time_unix_nano: String,
    pub attributes: Vec<Attribute>,
    pub events: Vec<OtlpEvent>,
    pub links: Vec<OtlpLink>,
    pub status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpEvent {
    pub time_unix_nano: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpLink {
    pub trace_id: String,
    pub span_id: String,
    pub attributes: Vec<Attribute>,
}

/// Span status: code 0 = unset, 1 = ok, 2 = error (with a message).
#[derive(Debug, Serialize)]
pub struct OtlpStatus {
    pub code: u8,
    pub message: String,
}

/// `{"key": ..., "value": {...}}` pair used for resource, span, event and
/// link attributes.
#[derive(Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: AnyValue,
}

/// OTLP `AnyValue`.
///
/// # Mapping from `opentelemetry::Value`
///
/// - `Value::Bool` → `{"boolValue": true}`
/// - `Value::I64` → `{"intValue": "123"}` (64-bit ints travel as strings)
/// - `Value::F64` → `{"doubleValue": 1.5}`
/// - `Value::String` → `{"stringValue": "..."}`
/// - `Value::Array` → `{"stringValue": "<debug text>"}`
#[derive(Debug, PartialEq, Serialize)]
pub enum AnyValue {
    #[serde(rename = "boolValue")]
    Bool(bool),
    #[serde(rename = "intValue")]
    Int(String),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "stringValue")]
    String(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(*b),
            Value::I64(i) => Self::Int(i.to_string()),
            Value::F64(f) => Self::Double(*f),
            Value::String(s) => Self::String(s.to_string()),
            Value::Array(_) => Self::String(format!("{value:?}")),
        }
    }
}

impl From<&KeyValue> for Attribute {
    fn from(kv: &KeyValue) -> Self {
        Self {
            key: kv.key.to_string(),
            value: AnyValue::from(&kv.value),
        }
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status_parts(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(kvs: &[KeyValue]) -> Vec<Attribute> {
    kvs.iter().map(Attribute::from).collect()
}

fn event(event: &Event) -> OtlpEvent {
    OtlpEvent {
        time_unix_nano: unix_nanos(event.timestamp),
        name: event.name.to_string(),
        attributes: attributes(&event.attributes),
    }
}

fn link(link: &Link) -> OtlpLink {
    OtlpLink {
        trace_id: format!("{:032x}", link.span_context.trace_id()),
        span_id: format!("{:016x}", link.span_context.span_id()),
        attributes: attributes(&link.attributes),
    }
}

fn span(span: &SpanData) -> OtlpSpan {
    let (code, message) = status_parts(&span.status);
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    OtlpSpan {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: kind_code(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span.events.iter().map(event).collect(),
        links: span.links.iter().map(link).collect(),
        status: OtlpStatus { code, message },
    }
}

/// Builds OTLP documents for span batches under one resource.
///
/// # Example
///
/// ```rust
/// use linedisplay::observability::span_formatter::SpanFormatter;
/// use opentelemetry::KeyValue;
/// use opentelemetry_sdk::resource::Resource;
///
/// let formatter = SpanFormatter::new(Resource::new(vec![KeyValue::new("service.name", "linedisplay")]));
/// let json = serde_json::to_string(&formatter.format_batch(&[]))?;
/// assert!(json.starts_with("{\"resourceSpans\""));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    /// Creates a formatter for spans produced by `resource`.
    ///
    /// # Parameters
    ///
    /// * `resource` - Resource whose attributes head every document
    #[must_use]
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats one export batch.
    ///
    /// # Parameters
    ///
    /// * `batch` - Spans handed to the exporter, possibly empty
    ///
    /// # Returns
    ///
    /// A document with a single resource and a single [`SCOPE_NAME`] scope
    /// holding every span of the batch. Serialize it with `serde_json`.
    #[must_use]
    pub fn format_batch(&self, batch: &[SpanData]) -> OtlpDocument {
        let resource_attributes = self
            .resource
            .iter()
            .map(|(key, value)| Attribute {
                key: key.to_string(),
                value: AnyValue::from(value),
            })
            .collect();

        OtlpDocument {
            resource_spans: vec![ResourceSpans {
                resource: OtlpResource {
                    attributes: resource_attributes,
                },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(span).collect(),
                }],
            }],
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}
