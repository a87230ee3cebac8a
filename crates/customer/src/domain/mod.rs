//! Domain Layer
//!
//! Contains the aggregate, value objects, and repository trait.

pub mod aggregate;
pub mod repository;
pub mod value_object;

// Re-exports
pub use aggregate::customer::Customer;
pub use repository::CustomerRepository;
