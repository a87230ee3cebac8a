//! Product Aggregate
//!
//! Immutable catalog input at order placement time. The order context does
//! not manage the catalog; a product arrives fully formed and its price is
//! snapshotted into the order's line items.

use kernel::id::ProductId;

use crate::domain::value_object::money::Money;
use crate::domain::value_object::sku::Sku;

/// Product as seen by the order context
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    sku: Sku,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, sku: Sku) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            sku,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }
}
