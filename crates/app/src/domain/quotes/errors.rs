//! Quotes service errors.

use thiserror::Error;

use crate::storage::RepositoryError;

#[derive(Debug, Error)]
pub enum QuotesServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("storage error")]
    Storage(#[from] RepositoryError),
}
