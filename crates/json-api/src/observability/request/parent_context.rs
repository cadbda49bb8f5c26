//! Parent trace context extraction from HTTP headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Extract a valid remote parent from `traceparent`/`tracestate` headers.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let carrier = HeaderCarrier(headers);

    global::get_text_map_propagator(|propagator| {
        // A fresh base context keeps requests without trace headers from
        // inheriting the in-process span chain.
        let context = propagator.extract_with_context(&Context::new(), &carrier);

        context
            .span()
            .span_context()
            .is_valid()
            .then_some(context.clone())
    })
}

#[derive(Debug)]
struct HeaderCarrier<'a>(&'a HeaderMap);

impl Extractor for HeaderCarrier<'_> {
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
    use salvo::http::header::HeaderValue;

    use super::*;

    #[test]
    fn test_valid_traceparent_is_extracted() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();
        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
        );

        assert!(extract_parent_context(&headers).is_some());
    }

    #[test]
    fn test_missing_headers_yield_no_parent() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        assert!(extract_parent_context(&HeaderMap::new()).is_none());
    }
}
