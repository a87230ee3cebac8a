//! Stock Keeping Unit (SKU) Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::domain_error::{DomainError, DomainResult};

/// Stock keeping unit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Create a new SKU with validation
    pub fn from(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::new(
                "Sku creation value cannot be null or empty.",
            ));
        }

        Ok(Self(value))
    }

    /// Get the SKU as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::from(value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}
