//! Prometheus metrics collection and exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const LATENCY_BUCKETS: [f64; 14] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 1.5, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct CheckoutMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    orders_issued_total: IntCounterVec,
    payment_checks_total: IntCounterVec,
}

static CHECKOUT_METRICS: OnceLock<Option<CheckoutMetrics>> = OnceLock::new();

#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        if let Some(metrics) = metrics() {
            metrics.requests_in_flight.inc();
            return Self { tracked: true };
        }

        Self { tracked: false }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_class = status_class(status_code);
    let status_code = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class, status_code.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count an issued order by product kind.
pub(crate) fn observe_order_issued(kind: &str) {
    if let Some(metrics) = metrics() {
        metrics.orders_issued_total.with_label_values(&[kind]).inc();
    }
}

/// Count a payment status check by the status it reported.
pub(crate) fn observe_payment_check(status: &str) {
    if let Some(metrics) = metrics() {
        metrics
            .payment_checks_total
            .with_label_values(&[status])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let metric_families = metrics.registry.gather();

    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metric_families, &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    let content_type = match HeaderValue::from_str(encoder.format_type()) {
        Ok(value) => value,
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    res.headers_mut().insert(CONTENT_TYPE, content_type);
    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn metrics() -> Option<&'static CheckoutMetrics> {
    CHECKOUT_METRICS.get_or_init(build_metrics).as_ref()
}

fn register<C>(registry: &Registry, name: &str, metric: Result<C, prometheus::Error>) -> Option<C>
where
    C: Collector + Clone + 'static,
{
    let metric = match metric {
        Ok(metric) => metric,
        Err(source) => {
            error!("failed to create {name} metric: {source}");
            return None;
        }
    };

    if let Err(source) = registry.register(Box::new(metric.clone())) {
        error!("failed to register {name} metric: {source}");
        return None;
    }

    Some(metric)
}

fn build_metrics() -> Option<CheckoutMetrics> {
    let registry = Registry::new();

    let requests_total = register(
        &registry,
        "requests_total",
        IntCounterVec::new(
            Opts::new(
                "vitrine_json_http_requests_total",
                "Total HTTP requests partitioned by method, route, status class, and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        ),
    )?;

    let request_duration_seconds = register(
        &registry,
        "request_duration",
        HistogramVec::new(
            HistogramOpts::new(
                "vitrine_json_http_request_duration_seconds",
                "HTTP request duration in seconds partitioned by method and route.",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "route"],
        ),
    )?;

    let requests_in_flight = register(
        &registry,
        "requests_in_flight",
        IntGauge::with_opts(Opts::new(
            "vitrine_json_http_requests_in_flight",
            "Current number of in-flight HTTP requests.",
        )),
    )?;

    let orders_issued_total = register(
        &registry,
        "orders_issued_total",
        IntCounterVec::new(
            Opts::new(
                "vitrine_json_orders_issued_total",
                "PIX payment codes issued, partitioned by product kind.",
            ),
            &["kind"],
        ),
    )?;

    let payment_checks_total = register(
        &registry,
        "payment_checks_total",
        IntCounterVec::new(
            Opts::new(
                "vitrine_json_payment_checks_total",
                "Payment status checks, partitioned by reported status.",
            ),
            &["status"],
        ),
    )?;

    Some(CheckoutMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        orders_issued_total,
        payment_checks_total,
    })
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };

    use super::*;

    #[tokio::test]
    async fn metrics_endpoint_exposes_checkout_metrics() {
        observe_request("POST", "/api/gerar-pix", 200, 0.042);
        observe_request("GET", "/api/verificar-pagamento/{uuid}", 404, 0.003);
        observe_order_issued("curso");
        observe_payment_check("pendente");

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response_result = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await;

        let response: String = response_result.unwrap_or_default();

        for metric in [
            "vitrine_json_http_requests_total",
            "vitrine_json_http_request_duration_seconds",
            "vitrine_json_http_requests_in_flight",
            "vitrine_json_orders_issued_total",
            "vitrine_json_payment_checks_total",
        ] {
            assert!(response.contains(metric), "expected {metric} in response");
        }
    }

    #[test]
    fn status_codes_map_to_classes() {
        assert_eq!(status_class(201), "2xx");
        assert_eq!(status_class(404), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "other");
    }
}
