//! W3C trace context extraction from incoming request headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Remote parent context, when the caller sent a valid `traceparent`.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let context = global::get_text_map_propagator(|propagator| {
        // Fresh base context so requests without trace headers start a new trace.
        propagator.extract_with_context(&Context::new(), &Headers(headers))
    });

    let has_remote_parent = context.span().span_context().is_valid();

    has_remote_parent.then_some(context)
}

#[derive(Debug)]
struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use salvo::http::HeaderValue;

    use super::*;

    #[test]
    fn valid_traceparent_yields_remote_parent() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();
        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
        );

        let context = extract_parent_context(&headers);

        assert!(context.is_some(), "expected a parent context");
    }

    #[test]
    fn missing_traceparent_yields_nothing() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        assert!(extract_parent_context(&HeaderMap::new()).is_none());
    }
}
