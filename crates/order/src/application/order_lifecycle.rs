//! Order Lifecycle Use Cases
//!
//! Load, transition, persist. One use case per lifecycle command so each
//! can be wired and authorized independently.

use std::sync::Arc;

use kernel::id::OrderId;

use crate::domain::repository::OrderRepository;
use crate::error::{OrderError, OrderResult};

/// Confirm order use case
pub struct ConfirmOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> ConfirmOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: &OrderId) -> OrderResult<()> {
        let mut order = self
            .repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.confirm()?;

        self.repo.update(&order).await?;
        self.repo.commit().await?;

        tracing::info!(order_id = %order_id, "Order confirmed");

        Ok(())
    }
}

/// Ship order use case
pub struct ShipOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> ShipOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: &OrderId) -> OrderResult<()> {
        let mut order = self
            .repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.ship()?;

        self.repo.update(&order).await?;
        self.repo.commit().await?;

        tracing::info!(order_id = %order_id, "Order shipped");

        Ok(())
    }
}

/// Complete order use case
pub struct CompleteOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> CompleteOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: &OrderId) -> OrderResult<()> {
        let mut order = self
            .repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.complete()?;

        self.repo.update(&order).await?;
        self.repo.commit().await?;

        tracing::info!(order_id = %order_id, "Order completed");

        Ok(())
    }
}

/// Cancel order use case
pub struct CancelOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> CancelOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: &OrderId) -> OrderResult<()> {
        let mut order = self
            .repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        order.cancel()?;

        self.repo.update(&order).await?;
        self.repo.commit().await?;

        tracing::info!(order_id = %order_id, "Order cancelled");

        Ok(())
    }
}
