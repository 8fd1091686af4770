//! Access Grants Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::access::records::{AccessGrantRecord, AccessToken},
    storage::{MemoryTable, RepositoryError},
};

#[derive(Debug, Default)]
pub struct InMemoryAccessGrantsRepository {
    grants: MemoryTable<AccessToken, AccessGrantRecord>,
}

impl InMemoryAccessGrantsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessGrantsRepository for InMemoryAccessGrantsRepository {
    async fn get_grant(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AccessGrantRecord>, RepositoryError> {
        Ok(self.grants.get(token).await)
    }

    async fn put_grant(&self, grant: AccessGrantRecord) -> Result<(), RepositoryError> {
        self.grants.put(grant.token.clone(), grant).await;

        Ok(())
    }

    async fn list_grants(&self) -> Result<Vec<AccessGrantRecord>, RepositoryError> {
        let mut grants = self.grants.values().await;

        grants.sort_by_key(|grant| grant.granted_at);

        Ok(grants)
    }
}

#[automock]
#[async_trait]
pub trait AccessGrantsRepository: Send + Sync {
    /// Look up a grant by its token.
    async fn get_grant(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AccessGrantRecord>, RepositoryError>;

    /// Insert or replace a grant.
    async fn put_grant(&self, grant: AccessGrantRecord) -> Result<(), RepositoryError>;

    /// All grants, oldest first.
    async fn list_grants(&self) -> Result<Vec<AccessGrantRecord>, RepositoryError>;
}
