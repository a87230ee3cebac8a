//! Order Aggregate
//!
//! Owns the line items and the lifecycle status. Orders are created
//! atomically with all their items and start in `Placed`; every later
//! transition is guarded by the current status.
//!
//! ```text
//! Placed -> Confirmed -> Shipped -> Completed
//!    \          |
//!     +---------+--> Cancelled   (not after Shipped)
//! ```

use kernel::error::domain_error::{DomainError, DomainResult};
use kernel::id::{CustomerId, OrderId};
use kernel::value_object::address::Address;

use crate::domain::aggregate::product::Product;
use crate::domain::value_object::order_item::OrderItem;
use crate::domain::value_object::order_status::OrderStatus;

/// Order aggregate root
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    status: OrderStatus,
    items: Vec<OrderItem>,
    shipping_address: Address,
    billing_address: Option<Address>,
}

impl Order {
    /// Create a new order atomically with all its items
    ///
    /// Snapshots each product's current price into a line item. The order
    /// starts in `Placed`; there is no draft assembly phase here.
    pub fn create(
        customer_id: CustomerId,
        shipping_address: Address,
        billing_address: Option<Address>,
        products: &[Product],
    ) -> DomainResult<Self> {
        if products.is_empty() {
            return Err(DomainError::new("An order must contain at least one item."));
        }

        let id = OrderId::new();
        let items = products
            .iter()
            .map(|product| OrderItem::new(id, *product.id(), product.price().clone()))
            .collect();

        Ok(Self {
            id,
            customer_id,
            status: OrderStatus::Placed,
            items,
            shipping_address,
            billing_address,
        })
    }

    /// Confirm the order, typically after successful payment processing
    pub fn confirm(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Placed {
            return Err(DomainError::new("Only a placed order can be confirmed."));
        }

        self.status = OrderStatus::Confirmed;
        Ok(())
    }

    /// Ship the order
    pub fn ship(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Confirmed {
            return Err(DomainError::new("Only a confirmed order can be shipped."));
        }

        self.status = OrderStatus::Shipped;
        Ok(())
    }

    /// Complete the order after delivery
    pub fn complete(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Shipped {
            return Err(DomainError::new("Only a shipped order can be completed."));
        }

        self.status = OrderStatus::Completed;
        Ok(())
    }

    /// Cancel the order
    ///
    /// Rejected once the order has been shipped or completed. Cancelling
    /// an already-cancelled order is a no-op.
    pub fn cancel(&mut self) -> DomainResult<()> {
        // TODO: allow cancelling a shipped order on shipping failure, revisit
        if self.status == OrderStatus::Shipped || self.status == OrderStatus::Completed {
            return Err(DomainError::new(format!(
                "Cannot cancel an order that is already {}.",
                self.status
            )));
        }

        if self.status == OrderStatus::Cancelled {
            return Ok(());
        }

        self.status = OrderStatus::Cancelled;
        Ok(())
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }
}
