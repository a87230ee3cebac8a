//! Activation Use Cases
//!
//! Activate and deactivate a customer.

use std::sync::Arc;

use kernel::id::CustomerId;

use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};

/// Activate customer use case
pub struct ActivateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> ActivateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, customer_id: &CustomerId) -> CustomerResult<()> {
        let mut customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.activate();

        self.repo.update(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer activated");

        Ok(())
    }
}

/// Deactivate customer use case
pub struct DeactivateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> DeactivateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, customer_id: &CustomerId) -> CustomerResult<()> {
        let mut customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.deactivate();

        self.repo.update(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer deactivated");

        Ok(())
    }
}
