//! Quote Errors

use tracing::error;

use vitrine_app::domain::quotes::QuotesServiceError;

use crate::errors::ApiError;

pub(crate) const INCOMPLETE_DATA: &str = "Dados incompletos";
pub(crate) const SUBMISSION_FAILED: &str = "Erro ao processar solicitação";

pub(crate) fn into_api_error(error: QuotesServiceError) -> ApiError {
    match error {
        QuotesServiceError::MissingRequiredData => ApiError::bad_request(INCOMPLETE_DATA),
        QuotesServiceError::Storage(source) => {
            error!("failed to store quote request: {source}");

            ApiError::internal(SUBMISSION_FAILED)
        }
    }
}
