//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("{} missing from depot", std::any::type_name::<T>());

            ApiError::internal("Internal Server Error")
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_value_maps_to_500() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert_eq!(
            result.err().map(|error| error.status()),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();
        depot.inject(String::from("vitrine"));

        assert_eq!(
            depot.obtain_or_500::<String>().ok().map(String::as_str),
            Some("vitrine")
        );
    }
}
