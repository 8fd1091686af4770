//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    clock::Clock,
    domain::{
        access::{
            AccessGrantsRepository,
            records::{AccessGrantRecord, AccessToken},
        },
        orders::{
            data::{IssuedOrder, NewOrder, PaymentCheck},
            errors::OrdersServiceError,
            payment::{PaymentPayload, PaymentSettings},
            records::{OrderRecord, OrderStatus, OrderUuid, ProductKind},
            repository::OrdersRepository,
            settlement::{SettlementAuthority, SettlementStatus},
        },
    },
};

/// How long a course access grant stays valid by default.
pub const DEFAULT_GRANT_VALIDITY: SignedDuration = SignedDuration::from_hours(24 * 30);

/// Settings for issuing and settling orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersSettings {
    pub payment: PaymentSettings,
    pub grant_validity: SignedDuration,
}

impl Default for OrdersSettings {
    fn default() -> Self {
        Self {
            payment: PaymentSettings::default(),
            grant_validity: DEFAULT_GRANT_VALIDITY,
        }
    }
}

/// Issues PIX payment codes and settles orders through a [`SettlementAuthority`].
#[derive(Clone)]
pub struct PixOrdersService {
    orders: Arc<dyn OrdersRepository>,
    grants: Arc<dyn AccessGrantsRepository>,
    settlement: Arc<dyn SettlementAuthority>,
    clock: Arc<dyn Clock>,
    settings: OrdersSettings,
    settle_lock: Arc<Mutex<()>>,
}

impl PixOrdersService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersRepository>,
        grants: Arc<dyn AccessGrantsRepository>,
        settlement: Arc<dyn SettlementAuthority>,
        clock: Arc<dyn Clock>,
        settings: OrdersSettings,
    ) -> Self {
        Self {
            orders,
            grants,
            settlement,
            clock,
            settings,
            settle_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn settle(
        &self,
        order: &mut OrderRecord,
        now: Timestamp,
    ) -> Result<(), OrdersServiceError> {
        order.status = OrderStatus::Paid;

        if order.kind == ProductKind::Course {
            let token = AccessToken::generate();

            let expires_at = now
                .checked_add(self.settings.grant_validity)
                .map_err(OrdersServiceError::GrantExpiry)?;

            self.grants
                .put_grant(AccessGrantRecord {
                    token: token.clone(),
                    order: order.uuid,
                    email: None,
                    granted_at: now,
                    expires_at,
                })
                .await?;

            order.access_token = Some(token);
        }

        self.orders.put_order(order.clone()).await?;

        // The order is already stored as paid; a failed acknowledgement must
        // not turn the check into an error.
        if let Err(error) = self.settlement.confirm(order).await {
            warn!(order = %order.uuid, "failed to confirm settlement: {error}");
        }

        info!(
            order = %order.uuid,
            kind = order.kind.as_str(),
            amount = %order.payment.amount,
            "order settled"
        );

        Ok(())
    }
}

#[async_trait]
impl OrdersService for PixOrdersService {
    async fn issue_order(&self, order: NewOrder) -> Result<IssuedOrder, OrdersServiceError> {
        let payment = PaymentPayload::new(&self.settings.payment, order.amount);
        let qr_code = payment.qr_data_uri()?;

        let record = OrderRecord {
            uuid: OrderUuid::new(),
            payment,
            status: OrderStatus::Pending,
            kind: order.kind,
            created_at: self.clock.now(),
            access_token: None,
        };

        self.orders.put_order(record.clone()).await?;

        info!(
            order = %record.uuid,
            kind = record.kind.as_str(),
            amount = %record.payment.amount,
            txid = %record.payment.transaction_id,
            "order issued"
        );

        Ok(IssuedOrder {
            uuid: record.uuid,
            qr_code,
            payment_key: record.payment.key,
            amount: record.payment.amount,
        })
    }

    async fn check_payment(&self, order: OrderUuid) -> Result<PaymentCheck, OrdersServiceError> {
        // Serialise settlement so a paid order can never mint a second token.
        let _settling = self.settle_lock.lock().await;

        let mut record = self
            .orders
            .get_order(order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        if record.status == OrderStatus::Pending {
            let now = self.clock.now();

            if self.settlement.check(&record, now).await? == SettlementStatus::Settled {
                self.settle(&mut record, now).await?;
            }
        }

        Ok(record.into())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Create a pending order and its payment code.
    async fn issue_order(&self, order: NewOrder) -> Result<IssuedOrder, OrdersServiceError>;

    /// Report an order's status, settling it if the authority says it was paid.
    async fn check_payment(&self, order: OrderUuid) -> Result<PaymentCheck, OrdersServiceError>;
}
