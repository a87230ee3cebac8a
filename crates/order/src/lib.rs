//! Order Bounded Context
//!
//! Clean Architecture structure:
//! - `domain/` - aggregates, value objects, repository trait
//! - `application/` - use cases
//! - `infra/` - repository implementations
//!
//! ## Features
//! - Atomic order placement: all line items snapshot their price at creation
//! - Lifecycle state machine: Placed -> Confirmed -> Shipped -> Completed,
//!   with Cancelled reachable until shipment and cancel idempotent
//! - Product as an immutable catalog input at placement time

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::aggregate::order::Order;
pub use domain::aggregate::product::Product;
pub use domain::repository::OrderRepository;
pub use domain::value_object::money::Money;
pub use domain::value_object::order_status::OrderStatus;
pub use domain::value_object::sku::Sku;
pub use error::{OrderError, OrderResult};
pub use infra::memory::InMemoryOrderRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::domain_error::{DomainError, DomainResult};
