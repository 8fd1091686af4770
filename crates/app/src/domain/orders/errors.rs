//! Orders service errors.

use thiserror::Error;

use crate::{
    domain::orders::{payment::PaymentCodeError, settlement::SettlementError},
    storage::RepositoryError,
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("failed to build payment code")]
    PaymentCode(#[from] PaymentCodeError),

    #[error("settlement authority failed")]
    Settlement(#[from] SettlementError),

    #[error("access grant expiry out of range")]
    GrantExpiry(#[source] jiff::Error),

    #[error("storage error")]
    Storage(#[from] RepositoryError),
}
