//! Request Quote Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_app::domain::quotes::data::NewQuote;

use crate::{
    errors::ApiError,
    extensions::*,
    quotes::errors::{INCOMPLETE_DATA, into_api_error},
    state::State,
};

const RECEIVED: &str = "Solicitação recebida com sucesso!";

/// Quote Request
///
/// Fields accept strings or numbers; contact numbers often arrive unquoted.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteRequest {
    pub email: Option<Value>,
    pub whatsapp: Option<Value>,
    pub descricao: Option<Value>,
}

/// Anything other than a string or number counts as missing.
fn field_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

impl From<QuoteRequest> for NewQuote {
    fn from(request: QuoteRequest) -> Self {
        NewQuote {
            email: field_text(request.email),
            whatsapp: field_text(request.whatsapp),
            description: field_text(request.descricao),
        }
    }
}

/// Quote Acknowledgement Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteReceivedResponse {
    pub success: bool,
    pub message: String,
}

/// Request Quote Handler
///
/// Records a custom-work quote request.
#[endpoint(
    tags("quotes"),
    summary = "Request a quote",
    responses(
        (status_code = StatusCode::OK, description = "Quote request received"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<QuoteReceivedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<QuoteRequest>()
        .await
        .map_err(|_malformed| ApiError::bad_request(INCOMPLETE_DATA))?;

    state
        .app
        .quotes
        .submit_quote(request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(QuoteReceivedResponse {
        success: true,
        message: RECEIVED.to_string(),
    }))
}
