//! Tracing subscriber and telemetry lifecycle management.

use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{
    ServerConfig,
    observability::{LogFormat, LoggingConfig},
};

use super::{ObservabilityError, otel, settings};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the global subscriber and, when enabled, the OTLP exporter.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        let tracer_provider = if config.tracing.enabled {
            global::set_text_map_propagator(TraceContextPropagator::new());

            Some(otel::build_tracer_provider(&config.tracing)?)
        } else {
            None
        };

        let otel_layer = tracer_provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer()
                .with_tracer(provider.tracer(config.tracing.service_name.clone()))
        });

        tracing_subscriber::registry()
            .with(fmt_layer(config.logging.log_format))
            .with(otel_layer)
            .with(env_filter(&config.logging))
            .try_init()?;

        Ok(Self { tracer_provider })
    }

    /// Flush pending spans before exit.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to shutdown tracer provider: {source}");
        }
    }
}

fn fmt_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
    }
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directives()))
}
