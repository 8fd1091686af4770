//! Quotes Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::quotes::records::{QuoteRecord, QuoteUuid},
    storage::{MemoryTable, RepositoryError},
};

#[derive(Debug, Default)]
pub struct InMemoryQuotesRepository {
    quotes: MemoryTable<QuoteUuid, QuoteRecord>,
}

impl InMemoryQuotesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuotesRepository for InMemoryQuotesRepository {
    async fn get_quote(&self, quote: QuoteUuid) -> Result<Option<QuoteRecord>, RepositoryError> {
        Ok(self.quotes.get(&quote).await)
    }

    async fn put_quote(&self, quote: QuoteRecord) -> Result<(), RepositoryError> {
        self.quotes.put(quote.uuid, quote).await;

        Ok(())
    }

    async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, RepositoryError> {
        let mut quotes = self.quotes.values().await;

        quotes.sort_by_key(|quote| quote.uuid);

        Ok(quotes)
    }
}

#[automock]
#[async_trait]
pub trait QuotesRepository: Send + Sync {
    async fn get_quote(&self, quote: QuoteUuid) -> Result<Option<QuoteRecord>, RepositoryError>;

    async fn put_quote(&self, quote: QuoteRecord) -> Result<(), RepositoryError>;

    async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, RepositoryError>;
}
