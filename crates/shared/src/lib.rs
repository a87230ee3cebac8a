//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary shared by
//! the customer and order bounded contexts:
//! - The unified domain error type and result alias
//! - Typed identifier wrappers
//! - Value objects with consistent meaning across contexts
//!   (email address, phone number, postal address)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod domain_error;
}
pub mod id;
pub mod value_object {
    pub mod address;
    pub mod email;
    pub mod phone_number;
}
