//! In-Memory Repository
//!
//! Thread-safe store honoring the staged-write contract, keyed by order id.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::id::OrderId;

use crate::domain::aggregate::order::Order;
use crate::domain::repository::OrderRepository;
use crate::error::OrderResult;

#[derive(Default)]
struct State {
    store: HashMap<OrderId, Order>,
    staged: Vec<Order>,
}

/// In-memory order repository
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed orders (staged writes excluded)
    pub async fn committed_count(&self) -> usize {
        self.state.read().await.store.len()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, order_id: &OrderId) -> OrderResult<Option<Order>> {
        let state = self.state.read().await;
        Ok(state.store.get(order_id).cloned())
    }

    async fn add(&self, order: &Order) -> OrderResult<()> {
        let mut state = self.state.write().await;
        state.staged.push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> OrderResult<()> {
        let mut state = self.state.write().await;
        state.staged.push(order.clone());
        Ok(())
    }

    async fn commit(&self) -> OrderResult<()> {
        let mut state = self.state.write().await;
        let staged: Vec<Order> = state.staged.drain(..).collect();
        for order in staged {
            state.store.insert(*order.id(), order);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregate::product::Product;
    use crate::domain::value_object::money::Money;
    use crate::domain::value_object::order_status::OrderStatus;
    use crate::domain::value_object::sku::Sku;
    use kernel::id::{CustomerId, ProductId};
    use kernel::value_object::address::Address;
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        let product = Product::new(
            ProductId::new(),
            "Widget",
            Money::from("AUD", Decimal::TEN).unwrap(),
            Sku::from("SKU-1").unwrap(),
        );
        let address = Address::from("123 Main St", "Anytown", "CA", "90210", "USA").unwrap();
        Order::create(CustomerId::new(), address, None, &[product]).unwrap()
    }

    #[tokio::test]
    async fn test_staged_write_invisible_until_commit() {
        let repo = InMemoryOrderRepository::new();
        let order = sample_order();

        repo.add(&order).await.unwrap();
        assert!(repo.find_by_id(order.id()).await.unwrap().is_none());

        repo.commit().await.unwrap();
        assert!(repo.find_by_id(order.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_replaces_committed_row() {
        let repo = InMemoryOrderRepository::new();
        let mut order = sample_order();
        repo.add(&order).await.unwrap();
        repo.commit().await.unwrap();

        order.confirm().unwrap();
        repo.update(&order).await.unwrap();
        repo.commit().await.unwrap();

        let stored = repo.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), OrderStatus::Confirmed);
        assert_eq!(repo.committed_count().await, 1);
    }
}
