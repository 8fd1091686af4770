//! Checkout Timing Config

use std::time::Duration;

use clap::Args;
use jiff::SignedDuration;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Settlement simulation and quote acknowledgement timings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Seconds after which a pending order is treated as paid
    #[arg(long, env = "SETTLEMENT_DELAY_SECONDS", default_value_t = 30_u32)]
    pub settlement_delay_seconds: u32,

    /// Days a course access grant stays valid
    #[arg(long, env = "ACCESS_GRANT_DAYS", default_value_t = 30_u16)]
    pub access_grant_days: u16,

    /// Milliseconds to wait before acknowledging a quote request
    #[arg(long, env = "QUOTE_ACK_DELAY_MS", default_value_t = 1_500_u64)]
    pub quote_ack_delay_ms: u64,
}

impl CheckoutConfig {
    #[must_use]
    pub fn settlement_delay(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::from(self.settlement_delay_seconds))
    }

    #[must_use]
    pub fn grant_validity(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::from(self.access_grant_days) * SECONDS_PER_DAY)
    }

    #[must_use]
    pub fn quote_ack_delay(&self) -> Duration {
        Duration::from_millis(self.quote_ack_delay_ms)
    }
}
