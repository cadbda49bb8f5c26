//! HTTP span helpers.

/// Placeholder substituted for numeric path segments.
const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse identifier segments so spans and metric labels stay low-cardinality.
///
/// `/api/products/42` becomes `/api/products/{id}`.
fn normalise_path_for_span_name(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if is_identifier(segment) {
                ID_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_identifier(segment: &str) -> bool {
    segment.bytes().all(|b| b.is_ascii_digit())
}
