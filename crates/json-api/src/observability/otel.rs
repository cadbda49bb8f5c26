//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::{ServerConfig, observability::ObservabilityConfig};

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ServerConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let settings = &config.observability;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(settings.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(
            settings.otel_exporter_otlp_timeout_seconds,
        ))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler(settings.otel_trace_sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource(settings))
        .with_batch_exporter(exporter)
        .build())
}

fn resource(settings: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(settings.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", settings.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                settings.otel_deployment_environment.clone(),
            ),
        ])
        .build()
}

/// Parent-based sampler; root spans are kept at `sample_ratio`, clamped to `[0, 1]`.
fn sampler(sample_ratio: f64) -> Sampler {
    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
        sample_ratio.clamp(0.0, 1.0),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_ratio(sampler: &Sampler) -> Option<f64> {
        match sampler {
            Sampler::ParentBased(root) => match root.as_ref() {
                Sampler::TraceIdRatioBased(ratio) => Some(*ratio),
                _ => None,
            },
            _ => None,
        }
    }

    #[test]
    fn test_sampler_clamps_out_of_range_ratios() {
        assert_eq!(root_ratio(&sampler(1.5)), Some(1.0));
        assert_eq!(root_ratio(&sampler(-0.5)), Some(0.0));
        assert_eq!(root_ratio(&sampler(0.25)), Some(0.25));
    }
}
