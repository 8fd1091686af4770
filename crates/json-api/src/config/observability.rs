//! Logging & Tracing Config

use std::time::Duration;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directives, e.g. `info` or `vitrine_json=debug`
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 2_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives with noisy transport crates held at `warn`.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        format!(
            "{},h2=warn,hyper=warn,tonic=warn,opentelemetry=warn",
            self.log_level
        )
    }
}

/// OpenTelemetry trace export settings.
#[derive(Debug, Args)]
pub struct TracingConfig {
    /// Export request spans over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from incoming `traceparent` headers
    #[arg(
        long = "otel-parent-propagation",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(
        long = "otel-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3_u64
    )]
    pub timeout_seconds: u64,

    /// Service name attached to exported spans
    #[arg(
        long = "otel-service-name",
        env = "OTEL_SERVICE_NAME",
        default_value = "vitrine-json"
    )]
    pub service_name: String,

    /// Deployment environment attached to exported spans
    #[arg(
        long = "otel-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of root traces to sample, clamped to [0.0, 1.0]
    #[arg(
        long = "otel-sample-ratio",
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0_f64
    )]
    pub sample_ratio: f64,
}

impl TracingConfig {
    #[must_use]
    pub fn export_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    #[must_use]
    pub fn clamped_sample_ratio(&self) -> f64 {
        self.sample_ratio.clamp(0.0, 1.0)
    }

    /// Parent extraction only makes sense while spans are exported.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.enabled && self.parent_propagation
    }
}
