//! HTTP client for the checkout API.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::catalog::OrderKind;

/// Status reported once an order has been paid.
pub const PAID_STATUS: &str = "pago";

/// A PIX charge issued for an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixCharge {
    /// QR code image as a data URI.
    pub qr_code: String,
    /// Key the payer can paste into their banking app.
    pub pix_code: String,
    pub valor: String,
    pub pedido_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub status: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub token_acesso: Option<String>,
}

impl PaymentStatus {
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == PAID_STATUS
    }
}

/// A quote request as sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSubmission {
    pub email: String,
    pub whatsapp: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct GeneratePixBody {
    #[serde(with = "rust_decimal::serde::float")]
    valor: Decimal,
    tipo: &'static str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors raised while talking to the checkout API.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Transport or body decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Issue a PIX charge for `amount`.
    async fn generate_pix(
        &self,
        amount: Decimal,
        kind: OrderKind,
    ) -> Result<PixCharge, ApiClientError>;

    /// Ask whether an order has been paid.
    async fn check_payment(&self, order_id: &str) -> Result<PaymentStatus, ApiClientError>;

    /// Submit a custom-work quote request.
    async fn request_quote(&self, quote: QuoteSubmission) -> Result<QuoteAck, ApiClientError>;
}

/// [`StorefrontApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    base_url: String,
    http: Client,
}

impl HttpStorefrontApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiClientError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        return Err(ApiClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn generate_pix(
        &self,
        amount: Decimal,
        kind: OrderKind,
    ) -> Result<PixCharge, ApiClientError> {
        let response = self
            .http
            .post(self.url("gerar-pix"))
            .json(&GeneratePixBody {
                valor: amount,
                tipo: kind.as_str(),
            })
            .send()
            .await?;

        decode(response).await
    }

    async fn check_payment(&self, order_id: &str) -> Result<PaymentStatus, ApiClientError> {
        let response = self
            .http
            .get(self.url(&format!("verificar-pagamento/{order_id}")))
            .send()
            .await?;

        decode(response).await
    }

    async fn request_quote(&self, quote: QuoteSubmission) -> Result<QuoteAck, ApiClientError> {
        let response = self
            .http
            .post(self.url("solicitar-orcamento"))
            .json(&quote)
            .send()
            .await?;

        decode(response).await
    }
}
