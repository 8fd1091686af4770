//! Quotes service.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use tokio::time;
use tracing::info;

use crate::{
    clock::Clock,
    domain::quotes::{
        data::NewQuote,
        errors::QuotesServiceError,
        records::{QuoteRecord, QuoteUuid},
        repository::QuotesRepository,
    },
};

/// Pause before a quote request is acknowledged.
pub const DEFAULT_ACK_DELAY: Duration = Duration::from_millis(1_500);

/// Records quote requests and acknowledges them after a fixed pause.
#[derive(Clone)]
pub struct InboxQuotesService {
    quotes: Arc<dyn QuotesRepository>,
    clock: Arc<dyn Clock>,
    ack_delay: Duration,
}

impl InboxQuotesService {
    #[must_use]
    pub fn new(
        quotes: Arc<dyn QuotesRepository>,
        clock: Arc<dyn Clock>,
        ack_delay: Duration,
    ) -> Self {
        Self {
            quotes,
            clock,
            ack_delay,
        }
    }
}

#[async_trait]
impl QuotesService for InboxQuotesService {
    async fn submit_quote(&self, quote: NewQuote) -> Result<QuoteRecord, QuotesServiceError> {
        if !quote.is_complete() {
            return Err(QuotesServiceError::MissingRequiredData);
        }

        let record = QuoteRecord {
            uuid: QuoteUuid::new(),
            email: quote.email,
            whatsapp: quote.whatsapp,
            description: quote.description,
            received_at: self.clock.now(),
        };

        info!(
            quote = %record.uuid,
            email = %record.email,
            whatsapp = %record.whatsapp,
            description = %record.description,
            "quote requested"
        );

        self.quotes.put_quote(record.clone()).await?;

        time::sleep(self.ack_delay).await;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait QuotesService: Send + Sync {
    /// Validate, record and acknowledge a quote request.
    async fn submit_quote(&self, quote: NewQuote) -> Result<QuoteRecord, QuotesServiceError>;
}
