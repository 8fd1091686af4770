//! Payment Config

use clap::Args;
use vitrine_app::domain::orders::payment::{DEFAULT_PIX_KEY, PaymentSettings};

/// PIX payee settings.
#[derive(Debug, Args)]
pub struct PaymentConfig {
    /// PIX key shown to payers
    #[arg(long, env = "PIX_KEY", default_value = DEFAULT_PIX_KEY)]
    pub pix_key: String,

    /// Payee display name
    #[arg(long, env = "PIX_PAYEE_NAME", default_value = "Security Dev")]
    pub payee_name: String,

    /// Payee city
    #[arg(long, env = "PIX_PAYEE_CITY", default_value = "São Paulo")]
    pub payee_city: String,
}

impl PaymentConfig {
    #[must_use]
    pub fn payment_settings(&self) -> PaymentSettings {
        PaymentSettings {
            key: self.pix_key.clone(),
            payee_name: self.payee_name.clone(),
            payee_city: self.payee_city.clone(),
        }
    }
}
