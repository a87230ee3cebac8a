//! Domain Layer
//!
//! Contains the aggregates, value objects, and repository trait.

pub mod aggregate;
pub mod repository;
pub mod value_object;

// Re-exports
pub use aggregate::order::Order;
pub use aggregate::product::Product;
pub use repository::OrderRepository;
