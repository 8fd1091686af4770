//! Order Records

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{access::records::AccessToken, orders::payment::PaymentPayload},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product kind: {0}")]
pub struct UnknownProductKind(pub String);

/// What an order unlocks once paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Downloadable template.
    Template,

    /// Course access.
    Course,
}

impl ProductKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Course => "curso",
        }
    }
}

impl FromStr for ProductKind {
    type Err = UnknownProductKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "template" => Ok(Self::Template),
            "curso" => Ok(Self::Course),
            other => Err(UnknownProductKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendente",
            Self::Paid => "pago",
        }
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub payment: PaymentPayload,
    pub status: OrderStatus,
    pub kind: ProductKind,
    pub created_at: Timestamp,
    pub access_token: Option<AccessToken>,
}
