//! Place Order Use Case
//!
//! Validates raw inputs into value objects, builds the product snapshots,
//! and creates the order atomically.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::id::{CustomerId, OrderId, ProductId};
use kernel::value_object::address::Address;

use crate::domain::aggregate::order::Order;
use crate::domain::aggregate::product::Product;
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::money::Money;
use crate::domain::value_object::sku::Sku;
use crate::error::OrderResult;

/// Raw product fields for one line of the order
pub struct ProductInput {
    pub product_id: Uuid,
    pub name: String,
    pub currency: String,
    pub price: Decimal,
    pub sku: String,
}

/// Raw address fields
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressInput {
    fn into_address(self) -> Result<Address, kernel::error::domain_error::DomainError> {
        Address::from(
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        )
    }
}

/// Place order input
pub struct PlaceOrderInput {
    pub customer_id: Uuid,
    pub shipping_address: AddressInput,
    pub billing_address: Option<AddressInput>,
    pub products: Vec<ProductInput>,
}

/// Place order output
#[derive(Debug)]
pub struct PlaceOrderOutput {
    pub order_id: OrderId,
}

/// Place order use case
pub struct PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> PlaceOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: PlaceOrderInput) -> OrderResult<PlaceOrderOutput> {
        let customer_id = CustomerId::from_uuid(input.customer_id)?;
        let shipping_address = input.shipping_address.into_address()?;
        let billing_address = input
            .billing_address
            .map(AddressInput::into_address)
            .transpose()?;

        let mut products = Vec::with_capacity(input.products.len());
        for p in input.products {
            let product_id = ProductId::from_uuid(p.product_id)?;
            let price = Money::from(&p.currency, p.price)?;
            let sku = Sku::from(p.sku)?;
            products.push(Product::new(product_id, p.name, price, sku));
        }

        let order = Order::create(customer_id, shipping_address, billing_address, &products)?;
        let order_id = *order.id();

        self.repo.add(&order).await?;
        self.repo.commit().await?;

        tracing::info!(
            order_id = %order_id,
            customer_id = %customer_id,
            items = order.items().len(),
            "Order placed"
        );

        Ok(PlaceOrderOutput { order_id })
    }
}
