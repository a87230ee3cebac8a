//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Same staged-write contract as the customer context: `add` and `update`
//! record intent, `commit` applies the batch atomically.

use kernel::id::OrderId;

use crate::domain::aggregate::order::Order;
use crate::error::OrderResult;

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Find order by ID
    async fn find_by_id(&self, order_id: &OrderId) -> OrderResult<Option<Order>>;

    /// Stage a new order for insertion
    async fn add(&self, order: &Order) -> OrderResult<()>;

    /// Stage an updated order for persistence
    async fn update(&self, order: &Order) -> OrderResult<()>;

    /// Apply all staged writes atomically
    async fn commit(&self) -> OrderResult<()>;
}
