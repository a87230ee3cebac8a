//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Writes are staged: `add` and `update` record intent, and nothing becomes
//! visible to reads until `commit` applies the whole batch atomically.

use kernel::id::CustomerId;
use kernel::value_object::email::Email;

use crate::domain::aggregate::customer::Customer;
use crate::error::CustomerResult;

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Find customer by ID
    async fn find_by_id(&self, customer_id: &CustomerId) -> CustomerResult<Option<Customer>>;

    /// Find customer by email
    async fn find_by_email(&self, email: &Email) -> CustomerResult<Option<Customer>>;

    /// List customers, optionally filtered by activation state
    async fn find_all(&self, is_active: Option<bool>) -> CustomerResult<Vec<Customer>>;

    /// Stage a new customer for insertion
    async fn add(&self, customer: &Customer) -> CustomerResult<()>;

    /// Stage an updated customer for persistence
    async fn update(&self, customer: &Customer) -> CustomerResult<()>;

    /// Apply all staged writes atomically
    ///
    /// Validates email uniqueness across the store and the batch before
    /// applying anything. On failure nothing is applied and the staged
    /// writes are retained.
    async fn commit(&self) -> CustomerResult<()>;
}
