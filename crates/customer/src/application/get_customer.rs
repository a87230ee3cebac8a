//! Get Customer Use Case
//!
//! Read-side queries over the repository, projected into a view type.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use kernel::id::CustomerId;
use kernel::value_object::email::Email;

use crate::domain::aggregate::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};

/// Customer projection returned by queries
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub home_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub is_active: bool,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id().into_uuid(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            home_phone: customer.home_phone().map(ToString::to_string),
            mobile_phone: customer.mobile_phone().map(ToString::to_string),
            is_active: customer.is_active(),
        }
    }
}

/// Get customer use case
pub struct GetCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> GetCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a single customer by id
    pub async fn by_id(&self, customer_id: &CustomerId) -> CustomerResult<CustomerView> {
        let customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;
        Ok(CustomerView::from(&customer))
    }

    /// Fetch a single customer by email
    pub async fn by_email(&self, email: &str) -> CustomerResult<CustomerView> {
        let email = Email::from(email)?;
        let customer = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(CustomerError::NotFound)?;
        Ok(CustomerView::from(&customer))
    }

    /// List customers, optionally filtered by activation state
    pub async fn list(&self, is_active: Option<bool>) -> CustomerResult<Vec<CustomerView>> {
        let customers = self.repo.find_all(is_active).await?;
        Ok(customers.iter().map(CustomerView::from).collect())
    }
}
