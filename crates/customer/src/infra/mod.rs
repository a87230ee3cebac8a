//! Infrastructure Layer
//!
//! Repository implementations backed by concrete storage.

pub mod memory;

pub use memory::InMemoryCustomerRepository;
