//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Always `ok` while the process is serving requests
    pub status: String,
}

/// Healthcheck handler
///
/// Liveness probe for the checkout service. Storage is in-process, so there
/// is no downstream dependency to check.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}
