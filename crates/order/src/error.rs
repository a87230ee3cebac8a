//! Order Error Types

use kernel::error::domain_error::DomainError;
use thiserror::Error;

/// Order context errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found")]
    NotFound,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;
