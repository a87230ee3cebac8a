//! Money Value Object
//!
//! A currency code paired with a strictly positive decimal quantity. No
//! arithmetic is defined; line items snapshot a price, they do not sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::domain_error::{DomainError, DomainResult};

/// Monetary amount with currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    currency: String,
    quantity: Decimal,
}

impl Money {
    /// Create a new monetary amount with validation
    pub fn from(currency: impl AsRef<str>, quantity: Decimal) -> DomainResult<Self> {
        let trimmed = currency.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::new("Currency must not be null or empty."));
        }

        if quantity <= Decimal::ZERO {
            return Err(DomainError::new("Quantity must be greater than 0"));
        }

        Ok(Self {
            currency: trimmed.to_string(),
            quantity,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}
