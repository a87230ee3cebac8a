//! Order Item Value Object
//!
//! A line item snapshotting the product's price at the time the order was
//! placed. Later catalog price changes never affect an existing order.

use uuid::Uuid;

use kernel::id::{OrderId, ProductId};

use crate::domain::value_object::money::Money;

/// Line item within an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: Uuid,
    order_id: OrderId,
    product_id: ProductId,
    price: Money,
}

impl OrderItem {
    /// Create a new line item with a fresh identity
    pub(crate) fn new(order_id: OrderId, product_id: ProductId, price: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            price,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Price captured at placement time
    pub fn price(&self) -> &Money {
        &self.price
    }
}
