//! Update Contact Details Use Case
//!
//! Applies an email and phone change through the aggregate. The current
//! time is read here, at the application boundary, so the aggregate rule
//! stays deterministic.

use std::sync::Arc;

use chrono::Utc;

use kernel::id::CustomerId;
use kernel::value_object::email::Email;
use kernel::value_object::phone_number::PhoneNumber;

use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};

/// Update contact details input
pub struct UpdateContactDetailsInput {
    pub email: String,
    pub home_phone: Option<String>,
    pub mobile_phone: Option<String>,
}

/// Update contact details use case
pub struct UpdateContactDetailsUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateContactDetailsUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        customer_id: &CustomerId,
        input: UpdateContactDetailsInput,
    ) -> CustomerResult<()> {
        let email = Email::from(&input.email)?;
        let home_phone = PhoneNumber::from_nullable(input.home_phone.as_deref())?;
        let mobile_phone = PhoneNumber::from_nullable(input.mobile_phone.as_deref())?;

        let mut customer = self
            .repo
            .find_by_id(customer_id)
            .await?
            .ok_or(CustomerError::NotFound)?;

        customer.update_contact_details(email, home_phone, mobile_phone, Utc::now())?;

        self.repo.update(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer contact details updated");

        Ok(())
    }
}
