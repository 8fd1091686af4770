//! Process-global request logging settings, read by the middleware.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::config::ServerConfig;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(2_000);
static PARENT_PROPAGATION: AtomicBool = AtomicBool::new(false);

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(config.logging.slow_request_threshold_ms, Ordering::Relaxed);
    PARENT_PROPAGATION.store(config.tracing.propagates_parent(), Ordering::Relaxed);
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}

pub(super) fn otel_parent_propagation_enabled() -> bool {
    PARENT_PROPAGATION.load(Ordering::Relaxed)
}
