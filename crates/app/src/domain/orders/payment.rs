//! Simulated PIX payment payloads and their scannable codes.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use qrcode::{QrCode, render::svg};
use thiserror::Error;

use crate::{domain::orders::amount::Amount, tokens};

/// Default PIX key used when none is configured.
pub const DEFAULT_PIX_KEY: &str = "123e4567-e12b-12d1-a456-426655440000";

const QR_MIN_DIMENSION: u32 = 256;

#[derive(Debug, Error)]
pub enum PaymentCodeError {
    #[error("failed to encode payment code: {0}")]
    Encode(String),
}

/// Payee details stamped onto every payment payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSettings {
    /// PIX key the payer transfers to.
    pub key: String,

    /// Payee display name.
    pub payee_name: String,

    /// Payee city.
    pub payee_city: String,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            key: DEFAULT_PIX_KEY.to_string(),
            payee_name: "Security Dev".to_string(),
            payee_city: "São Paulo".to_string(),
        }
    }
}

/// Synthetic payment request built for a single order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPayload {
    pub key: String,
    pub amount: Amount,
    pub payee_name: String,
    pub payee_city: String,
    pub transaction_id: String,
}

impl PaymentPayload {
    /// Build a payload for `amount` with a fresh transaction id.
    #[must_use]
    pub fn new(settings: &PaymentSettings, amount: Amount) -> Self {
        Self {
            key: settings.key.clone(),
            amount,
            payee_name: settings.payee_name.clone(),
            payee_city: settings.payee_city.clone(),
            transaction_id: tokens::transaction_id(),
        }
    }

    /// Text encoded into the scannable code.
    #[must_use]
    pub fn code_contents(&self) -> String {
        format!("pix://{}?amount={}", self.key, self.amount)
    }

    /// Render the payload as an SVG QR code wrapped in a base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents do not fit in a QR code.
    pub fn qr_data_uri(&self) -> Result<String, PaymentCodeError> {
        let code = QrCode::new(self.code_contents().as_bytes())
            .map_err(|source| PaymentCodeError::Encode(source.to_string()))?;

        let image = code
            .render::<svg::Color<'_>>()
            .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            BASE64.encode(image.as_bytes())
        ))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn payload() -> Result<PaymentPayload, Box<dyn std::error::Error>> {
        Ok(PaymentPayload::new(
            &PaymentSettings::default(),
            Amount::parse("299.90")?,
        ))
    }

    #[test]
    fn code_contents_carry_key_and_amount() -> TestResult {
        assert_eq!(
            payload()?.code_contents(),
            "pix://123e4567-e12b-12d1-a456-426655440000?amount=299.90"
        );

        Ok(())
    }

    #[test]
    fn payload_copies_payee_details() -> TestResult {
        let payload = payload()?;

        assert_eq!(payload.payee_name, "Security Dev");
        assert_eq!(payload.payee_city, "São Paulo");
        assert!(payload.transaction_id.starts_with("TESTE"));

        Ok(())
    }

    #[test]
    fn renders_svg_data_uri() -> TestResult {
        let uri = payload()?.qr_data_uri()?;
        let encoded = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .ok_or("missing data uri prefix")?;

        let svg = String::from_utf8(BASE64.decode(encoded)?)?;

        assert!(svg.contains("<svg"), "expected svg markup");

        Ok(())
    }
}
