//! Storefront errors.

use thiserror::Error;

use crate::{api::ApiClientError, catalog::UnknownProduct};

/// Alert shown whenever a checkout request fails.
pub const GENERIC_ALERT: &str = "Erro ao processar pagamento. Por favor, tente novamente.";

/// Alert shown when a quote request cannot be sent.
pub const QUOTE_FAILED_ALERT: &str = "Erro ao enviar solicitação. Por favor, tente novamente.";

/// Alert shown when the quote form has blank fields.
pub const INCOMPLETE_QUOTE_ALERT: &str = "Por favor, preencha todos os campos.";

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("checkout API request failed: {0}")]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    UnknownProduct(#[from] UnknownProduct),

    #[error("no product selected")]
    NothingSelected,

    #[error("this checkout does not accept a product selection right now")]
    SelectionLocked,

    #[error("quote form has blank fields")]
    IncompleteQuote,

    #[error("quote request failed: {0}")]
    QuoteRejected(#[source] ApiClientError),
}

impl StorefrontError {
    /// Message to surface to the shopper.
    #[must_use]
    pub fn alert(&self) -> &str {
        match self {
            Self::IncompleteQuote => INCOMPLETE_QUOTE_ALERT,
            Self::QuoteRejected(_) => QUOTE_FAILED_ALERT,
            _ => GENERIC_ALERT,
        }
    }
}
