//! Custom-work quote form.

use crate::{
    api::{QuoteAck, QuoteSubmission, StorefrontApi},
    errors::StorefrontError,
};

/// Quote form as typed by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub email: String,
    pub whatsapp: String,
    pub description: String,
}

impl QuoteForm {
    /// Reject blank fields before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::IncompleteQuote`] when any field is blank.
    pub fn validate(self) -> Result<QuoteSubmission, StorefrontError> {
        let blank = [&self.email, &self.whatsapp, &self.description]
            .iter()
            .any(|field| field.trim().is_empty());

        if blank {
            return Err(StorefrontError::IncompleteQuote);
        }

        Ok(QuoteSubmission {
            email: self.email,
            whatsapp: self.whatsapp,
            description: self.description,
        })
    }
}

/// Validate and submit a quote request.
///
/// # Errors
///
/// Returns an error when the form is incomplete or the API call fails.
pub async fn submit_quote(
    api: &dyn StorefrontApi,
    form: QuoteForm,
) -> Result<QuoteAck, StorefrontError> {
    let submission = form.validate()?;

    api.request_quote(submission)
        .await
        .map_err(StorefrontError::QuoteRejected)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::{ApiClientError, MockStorefrontApi},
        errors::{INCOMPLETE_QUOTE_ALERT, QUOTE_FAILED_ALERT},
    };

    use super::*;

    fn form() -> QuoteForm {
        QuoteForm {
            email: "ana@example.com".to_string(),
            whatsapp: "+55 11 99999-0000".to_string(),
            description: "Landing page".to_string(),
        }
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_locally() {
        let mut api = MockStorefrontApi::new();

        api.expect_request_quote().never();

        let result = submit_quote(
            &api,
            QuoteForm {
                whatsapp: "  ".to_string(),
                ..form()
            },
        )
        .await;

        assert!(matches!(result, Err(StorefrontError::IncompleteQuote)));
        assert_eq!(
            result.err().as_ref().map(StorefrontError::alert),
            Some(INCOMPLETE_QUOTE_ALERT)
        );
    }

    #[tokio::test]
    async fn complete_form_is_submitted() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_request_quote()
            .once()
            .withf(|quote| quote.description == "Landing page")
            .return_once(|_| {
                Ok(QuoteAck {
                    success: true,
                    message: "Solicitação recebida com sucesso!".to_string(),
                })
            });

        let ack = submit_quote(&api, form()).await?;

        assert!(ack.success);

        Ok(())
    }

    #[tokio::test]
    async fn api_failures_surface_the_quote_alert() {
        let mut api = MockStorefrontApi::new();

        api.expect_request_quote().once().return_once(|_| {
            Err(ApiClientError::Rejected {
                status: 500,
                message: "Erro ao processar solicitação".to_string(),
            })
        });

        let result = submit_quote(&api, form()).await;

        assert_eq!(
            result.err().as_ref().map(StorefrontError::alert),
            Some(QUOTE_FAILED_ALERT)
        );
    }
}
