//! Update Name Use Case

use std::sync::Arc;

use kernel::id::CustomerId;

use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::customer_name::CustomerName;
use crate::error::{CustomerError, CustomerResult};

/// Update name use case
pub struct UpdateNameUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateNameUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, customer_id: &CustomerId, name: &str) -> CustomerResult<()> {
        let name = CustomerName::from(name)?;

        let mut customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.update_name(name);

        self.repo.update(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer name updated");

        Ok(())
    }
}
