//! Get Order Use Case
//!
//! Read-side query projecting an order and its line items into view types.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use kernel::id::OrderId;

use crate::domain::aggregate::order::Order;
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::order_status::OrderStatus;
use crate::error::{OrderError, OrderResult};

/// Line item projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub item_id: Uuid,
    pub product_id: Uuid,
    pub currency: String,
    pub price: Decimal,
}

/// Order projection returned by queries
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub items: Vec<OrderItemView>,
    pub shipping_address: String,
    pub billing_address: Option<String>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().into_uuid(),
            customer_id: order.customer_id().into_uuid(),
            status: order.status(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemView {
                    item_id: item.id(),
                    product_id: item.product_id().into_uuid(),
                    currency: item.price().currency().to_string(),
                    price: item.price().quantity(),
                })
                .collect(),
            shipping_address: order.shipping_address().to_string(),
            billing_address: order.billing_address().map(ToString::to_string),
        }
    }
}

/// Get order use case
pub struct GetOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> GetOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn by_id(&self, order_id: &OrderId) -> OrderResult<OrderView> {
        let order = self
            .repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound)?;
        Ok(OrderView::from(&order))
    }
}
