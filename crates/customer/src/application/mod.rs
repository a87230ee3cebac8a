//! Application Layer
//!
//! Use cases and application services.

pub mod activation;
pub mod create_customer;
pub mod get_customer;
pub mod update_address_details;
pub mod update_contact_details;
pub mod update_name;

// Re-exports
pub use activation::{ActivateCustomerUseCase, DeactivateCustomerUseCase};
pub use create_customer::{CreateCustomerInput, CreateCustomerOutput, CreateCustomerUseCase};
pub use get_customer::{CustomerView, GetCustomerUseCase};
pub use update_address_details::{AddressInput, UpdateAddressDetailsUseCase};
pub use update_contact_details::{UpdateContactDetailsInput, UpdateContactDetailsUseCase};
pub use update_name::UpdateNameUseCase;
