//! Orders Repository

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::orders::records::{OrderRecord, OrderUuid},
    storage::{MemoryTable, RepositoryError},
};

#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    orders: MemoryTable<OrderUuid, OrderRecord>,
}

impl InMemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersRepository for InMemoryOrdersRepository {
    async fn get_order(&self, order: OrderUuid) -> Result<Option<OrderRecord>, RepositoryError> {
        Ok(self.orders.get(&order).await)
    }

    async fn put_order(&self, order: OrderRecord) -> Result<(), RepositoryError> {
        self.orders.put(order.uuid, order).await;

        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        let mut orders = self.orders.values().await;

        orders.sort_by_key(|order| order.uuid);

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Option<OrderRecord>, RepositoryError>;

    /// Insert or replace an order.
    async fn put_order(&self, order: OrderRecord) -> Result<(), RepositoryError>;

    /// All orders in creation order.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::orders::{
        amount::Amount,
        payment::{PaymentPayload, PaymentSettings},
        records::{OrderStatus, ProductKind},
    };

    use super::*;

    fn make_order() -> TestResult<OrderRecord> {
        Ok(OrderRecord {
            uuid: OrderUuid::new(),
            payment: PaymentPayload::new(&PaymentSettings::default(), Amount::parse("10")?),
            status: OrderStatus::Pending,
            kind: ProductKind::Template,
            created_at: Timestamp::UNIX_EPOCH,
            access_token: None,
        })
    }

    #[tokio::test]
    async fn put_then_get_returns_order() -> TestResult {
        let repo = InMemoryOrdersRepository::new();
        let order = make_order()?;

        repo.put_order(order.clone()).await?;

        assert_eq!(repo.get_order(order.uuid).await?, Some(order));

        Ok(())
    }

    #[tokio::test]
    async fn put_replaces_in_place() -> TestResult {
        let repo = InMemoryOrdersRepository::new();
        let mut order = make_order()?;

        repo.put_order(order.clone()).await?;

        order.status = OrderStatus::Paid;
        repo.put_order(order.clone()).await?;

        assert_eq!(repo.list_orders().await?, vec![order]);

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_follows_creation_order() -> TestResult {
        let repo = InMemoryOrdersRepository::new();
        let first = make_order()?;
        let second = make_order()?;

        repo.put_order(second.clone()).await?;
        repo.put_order(first.clone()).await?;

        let uuids: Vec<OrderUuid> = repo
            .list_orders()
            .await?
            .into_iter()
            .map(|order| order.uuid)
            .collect();

        assert_eq!(uuids, vec![first.uuid, second.uuid]);

        Ok(())
    }
}
