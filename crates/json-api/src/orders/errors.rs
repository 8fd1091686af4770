//! Order Errors

use tracing::error;

use vitrine_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) const PROCESSING_FAILED: &str = "Erro ao processar pagamento";
pub(crate) const CHECK_FAILED: &str = "Erro ao verificar pagamento";
pub(crate) const ORDER_NOT_FOUND: &str = "Pedido não encontrado";

pub(crate) fn check_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found(ORDER_NOT_FOUND),
        error => {
            error!("failed to check payment: {error}");

            ApiError::internal(CHECK_FAILED)
        }
    }
}
