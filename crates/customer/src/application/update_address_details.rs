//! Update Address Details Use Case
//!
//! Replaces the billing and shipping addresses in one operation.

use std::sync::Arc;

use kernel::id::CustomerId;
use kernel::value_object::address::Address;

use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};

/// Raw address fields, validated into an `Address` value object
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

/// Update address details use case
pub struct UpdateAddressDetailsUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateAddressDetailsUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        customer_id: &CustomerId,
        billing: Option<AddressInput>,
        shipping: Option<AddressInput>,
    ) -> CustomerResult<()> {
        let billing = billing.map(AddressInput::into_address).transpose()?;
        let shipping = shipping.map(AddressInput::into_address).transpose()?;

        let mut customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.update_address_details(billing, shipping);

        self.repo.update(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer addresses updated");

        Ok(())
    }
}
