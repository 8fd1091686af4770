//! Orders Data

use crate::domain::{
    access::records::AccessToken,
    orders::{
        amount::Amount,
        records::{OrderRecord, OrderStatus, OrderUuid, ProductKind},
    },
};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub amount: Amount,
    pub kind: ProductKind,
}

/// A freshly issued order together with its payment code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedOrder {
    pub uuid: OrderUuid,
    /// Scannable code as a data URI.
    pub qr_code: String,
    /// Raw key the payer can copy instead of scanning.
    pub payment_key: String,
    pub amount: Amount,
}

/// Outcome of a settlement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCheck {
    pub status: OrderStatus,
    pub kind: ProductKind,
    pub access_token: Option<AccessToken>,
}

impl From<OrderRecord> for PaymentCheck {
    fn from(order: OrderRecord) -> Self {
        Self {
            status: order.status,
            kind: order.kind,
            access_token: order.access_token,
        }
    }
}
