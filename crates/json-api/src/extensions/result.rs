//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Map any error to a logged internal server error carrying a client-facing
/// message.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_internal_with_message() {
        let result: Result<(), &str> = Err("disk on fire");

        let error = result
            .or_500("failed to store quote", "Erro ao processar solicitação")
            .err();

        assert_eq!(
            error.as_ref().map(ApiError::status),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert_eq!(
            error.as_ref().map(ApiError::message),
            Some("Erro ao processar solicitação")
        );
    }
}
