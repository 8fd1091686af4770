//! Settlement authorities decide when an order counts as paid.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use thiserror::Error;
use tracing::debug;

use crate::domain::orders::records::OrderRecord;

/// Delay after which the simulated authority reports an order as paid.
pub const DEFAULT_SETTLEMENT_DELAY: SignedDuration = SignedDuration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementStatus {
    Pending,
    Settled,
}

#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("settlement provider unavailable: {0}")]
    Unavailable(String),
}

/// Settles orders after a fixed delay without consulting any provider.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimeSettlement {
    delay: SignedDuration,
}

impl ElapsedTimeSettlement {
    #[must_use]
    pub const fn new(delay: SignedDuration) -> Self {
        Self { delay }
    }
}

impl Default for ElapsedTimeSettlement {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLEMENT_DELAY)
    }
}

#[async_trait]
impl SettlementAuthority for ElapsedTimeSettlement {
    async fn check(
        &self,
        order: &OrderRecord,
        now: Timestamp,
    ) -> Result<SettlementStatus, SettlementError> {
        if now.duration_since(order.created_at) > self.delay {
            Ok(SettlementStatus::Settled)
        } else {
            Ok(SettlementStatus::Pending)
        }
    }

    async fn confirm(&self, order: &OrderRecord) -> Result<(), SettlementError> {
        debug!(order = %order.uuid, txid = %order.payment.transaction_id, "simulated settlement confirmed");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SettlementAuthority: Send + Sync {
    /// Report whether `order` has been paid as of `now`.
    async fn check(
        &self,
        order: &OrderRecord,
        now: Timestamp,
    ) -> Result<SettlementStatus, SettlementError>;

    /// Acknowledge that `order` was recorded as paid.
    async fn confirm(&self, order: &OrderRecord) -> Result<(), SettlementError>;
}
