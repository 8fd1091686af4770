//! Server configuration module

use clap::Parser;
use vitrine_app::context::AppSettings;

use crate::config::{
    checkout::CheckoutConfig,
    observability::{LoggingConfig, TracingConfig},
    payment::PaymentConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod checkout;
pub(crate) mod observability;
pub(crate) mod payment;
pub(crate) mod server;

/// Vitrine JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "vitrine-json", about = "Vitrine checkout API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// OpenTelemetry trace export settings.
    #[command(flatten)]
    pub tracing: TracingConfig,

    /// PIX payee settings.
    #[command(flatten)]
    pub payment: PaymentConfig,

    /// Settlement and quote timing settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        self.server.socket_addr()
    }

    /// Application settings derived from the payment and checkout sections.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            payment: self.payment.payment_settings(),
            settlement_delay: self.checkout.settlement_delay(),
            grant_validity: self.checkout.grant_validity(),
            quote_ack_delay: self.checkout.quote_ack_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_the_simulated_checkout() -> TestResult {
        let config = ServerConfig::try_parse_from(["vitrine-json"])?;
        let settings = config.app_settings();

        assert_eq!(config.server.port, 3000);
        assert_eq!(settings.payment.key, "123e4567-e12b-12d1-a456-426655440000");
        assert_eq!(settings.settlement_delay, SignedDuration::from_secs(30));
        assert_eq!(settings.grant_validity, SignedDuration::from_hours(24 * 30));
        assert_eq!(settings.quote_ack_delay.as_millis(), 1_500);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "vitrine-json",
            "--port",
            "8080",
            "--pix-key",
            "loja@example.com",
            "--settlement-delay-seconds",
            "5",
            "--access-grant-days",
            "7",
        ])?;
        let settings = config.app_settings();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(settings.payment.key, "loja@example.com");
        assert_eq!(settings.settlement_delay, SignedDuration::from_secs(5));
        assert_eq!(settings.grant_validity, SignedDuration::from_hours(24 * 7));

        Ok(())
    }
}
