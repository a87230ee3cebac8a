//! Customer Error Types
//!
//! Customer-specific error variants layered over the unified
//! `kernel::error::DomainError` type. Domain-rule violations raised by
//! the aggregate and value objects arrive through the `Domain` variant;
//! the other variants belong to the application/persistence boundary.

use kernel::error::domain_error::DomainError;
use thiserror::Error;

/// Customer-specific result type alias
pub type CustomerResult<T> = Result<T, CustomerError>;

/// Customer-specific error variants
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer not found
    #[error("Customer not found")]
    NotFound,

    /// Email already belongs to another customer.
    /// Uniqueness is enforced by storage, not by the aggregate.
    #[error("Email is already in use")]
    EmailInUse,

    /// A domain rule was violated
    #[error(transparent)]
    Domain(#[from] DomainError),
}
