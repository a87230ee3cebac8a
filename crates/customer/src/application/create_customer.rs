//! Create Customer Use Case
//!
//! Registers a new customer after validating raw inputs into value objects.

use std::sync::Arc;

use kernel::id::CustomerId;
use kernel::value_object::email::Email;
use kernel::value_object::phone_number::PhoneNumber;

use crate::domain::aggregate::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::customer_name::CustomerName;
use crate::error::{CustomerError, CustomerResult};

/// Create customer input
pub struct CreateCustomerInput {
    pub name: String,
    pub email: String,
    pub home_phone: Option<String>,
    pub mobile_phone: Option<String>,
}

/// Create customer output
#[derive(Debug)]
pub struct CreateCustomerOutput {
    pub customer_id: CustomerId,
}

/// Create customer use case
pub struct CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCustomerInput) -> CustomerResult<CreateCustomerOutput> {
        // Validate inputs into value objects
        let name = CustomerName::from(&input.name)?;
        let email = Email::from(&input.email)?;
        let home_phone = PhoneNumber::from_nullable(input.home_phone.as_deref())?;
        let mobile_phone = PhoneNumber::from_nullable(input.mobile_phone.as_deref())?;

        // Fast-path uniqueness check; commit re-validates authoritatively
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(CustomerError::EmailInUse);
        }

        let customer = Customer::create(name, email, home_phone, mobile_phone);
        let customer_id = *customer.id();

        self.repo.add(&customer).await?;
        self.repo.commit().await?;

        tracing::info!(customer_id = %customer_id, "Customer created");

        Ok(CreateCustomerOutput { customer_id })
    }
}
