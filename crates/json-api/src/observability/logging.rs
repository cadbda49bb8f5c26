//! Logging subscriber initialisation.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::warn;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::ObservabilityError;

/// Noisy transport crates are capped at `warn` whatever the base level is.
const QUIET_TARGETS: [&str; 6] = ["h2", "hyper", "tower", "tonic", "opentelemetry", "sqlx"];

pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    match config.logging.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
            tracer_provider,
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
            tracer_provider,
        ),
    }
}

fn filter_directives(base: &str) -> String {
    QUIET_TARGETS
        .iter()
        .fold(base.trim().to_string(), |mut directives, target| {
            directives.push(',');
            directives.push_str(target);
            directives.push_str("=warn");
            directives
        })
}

fn build_env_filter(level: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(filter_directives(level)) {
        Ok(filter) => (filter, true),
        Err(_invalid) => (EnvFilter::new(filter_directives("info")), false),
    }
}

fn init_with_layer<L>(
    config: &ServerConfig,
    fmt_layer: L,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let (filter, valid) = build_env_filter(&config.logging.log_level);

    let subscriber = tracing_subscriber::registry().with(fmt_layer).with(filter);

    if let Some(tracer_provider) = tracer_provider {
        let tracer = tracer_provider.tracer(config.observability.otel_service_name.clone());

        subscriber
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;
    } else {
        subscriber.try_init()?;
    }

    if !valid {
        warn!(
            log_level = %config.logging.log_level,
            "invalid log level directives, falling back to info"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cap_transport_crates() {
        assert_eq!(
            filter_directives(" debug "),
            "debug,h2=warn,hyper=warn,tower=warn,tonic=warn,opentelemetry=warn,sqlx=warn"
        );
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let (_filter, valid) = build_env_filter("catalog=notalevel");

        assert!(!valid, "bad directive should be rejected");
    }

    #[test]
    fn test_module_scoped_level_is_accepted() {
        let (_filter, valid) = build_env_filter("catalog_json=debug,info");

        assert!(valid, "module directives should parse");
    }
}
