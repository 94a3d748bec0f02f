use tracing::{Level, Span};

use super::TraceId;

/// Create a root span for a scenario run / settlement batch
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "run",
        name = %name,
        trace_id = %trace_id.as_str()
    )
}
