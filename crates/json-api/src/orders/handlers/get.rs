//! Verify Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::orders::{data::PaymentCheck, records::OrderUuid};

use crate::{
    errors::ApiError,
    extensions::*,
    observability::observe_payment_check,
    orders::errors::{ORDER_NOT_FOUND, check_error},
    state::State,
};

/// Payment Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentStatusResponse {
    /// `pendente` or `pago`
    pub status: String,

    /// Access token, present once a course order is paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_acesso: Option<String>,

    /// `template` or `curso`
    pub tipo: String,
}

impl From<PaymentCheck> for PaymentStatusResponse {
    fn from(check: PaymentCheck) -> Self {
        Self {
            status: check.status.as_str().to_string(),
            token_acesso: check.access_token.map(|token| token.into_string()),
            tipo: check.kind.as_str().to_string(),
        }
    }
}

/// Verify Payment Handler
///
/// Reports whether an order has been paid, settling it when the payment has
/// cleared.
#[endpoint(
    tags("orders"),
    summary = "Verify payment status",
    responses(
        (status_code = StatusCode::OK, description = "Current payment status"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PaymentStatusResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = order
        .into_inner()
        .parse::<OrderUuid>()
        .map_err(|_unparsable| ApiError::not_found(ORDER_NOT_FOUND))?;

    let check = state
        .app
        .orders
        .check_payment(order)
        .await
        .map_err(check_error)?;

    observe_payment_check(check.status.as_str());

    Ok(Json(check.into()))
}
