//! Customer Name Value Object
//!
//! ## Invariants
//! - Trimmed
//! - 1-200 characters inclusive (counted in characters, not bytes)

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::domain_error::{DomainError, DomainResult};

/// Maximum length for a customer name (in characters)
pub const CUSTOMER_NAME_MAX_LENGTH: usize = 200;

/// Validated, trimmed customer name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Create a new customer name with validation
    pub fn from(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::new("Customer name cannot be empty."));
        }

        if trimmed.chars().count() > CUSTOMER_NAME_MAX_LENGTH {
            return Err(DomainError::new(
                "Customer name cannot exceed 200 characters.",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::from(value)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}
