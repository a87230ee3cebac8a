//! Customer Bounded Context
//!
//! Clean Architecture structure:
//! - `domain/` - aggregate, value objects, repository trait
//! - `application/` - use cases
//! - `infra/` - repository implementations
//!
//! ## Features
//! - Customer creation with validated contact details
//! - Email changes limited to once every 30 days
//! - Full-replace address updates (billing and shipping independently)
//! - Soft activation state (customers are never deleted in-process)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use domain::aggregate::customer::Customer;
pub use domain::repository::CustomerRepository;
pub use domain::value_object::customer_name::CustomerName;
pub use error::{CustomerError, CustomerResult};
pub use infra::memory::InMemoryCustomerRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::domain_error::{DomainError, DomainResult};
