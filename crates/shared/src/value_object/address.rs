//! Address Value Object
//!
//! Postal address shared by both bounded contexts. All components are
//! required and trimmed. When an address is embedded in an aggregate that
//! needs persistence identity for it, the mapping layer attaches an
//! [`AddressId`](crate::id::AddressId); the value object itself stays
//! identity-free.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::domain_error::{DomainError, DomainResult};

/// Postal address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Create a new address with validation
    pub fn from(
        street: impl AsRef<str>,
        city: impl AsRef<str>,
        state: impl AsRef<str>,
        postal_code: impl AsRef<str>,
        country: impl AsRef<str>,
    ) -> DomainResult<Self> {
        let street = Self::required(street.as_ref(), "Street")?;
        let city = Self::required(city.as_ref(), "City")?;
        let state = Self::required(state.as_ref(), "State")?;
        let postal_code = Self::required(postal_code.as_ref(), "Postal code")?;
        let country = Self::required(country.as_ref(), "Country")?;

        Ok(Self {
            street,
            city,
            state,
            postal_code,
            country,
        })
    }

    fn required(value: &str, field: &'static str) -> DomainResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::new(format!("{field} cannot be empty.")));
        }
        Ok(trimmed.to_string())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.postal_code, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address() -> Address {
        Address::from("123 Main St", "Anytown", "CA", "90210", "USA").unwrap()
    }

    #[test]
    fn test_valid_address() {
        let address = test_address();
        assert_eq!(address.street(), "123 Main St");
        assert_eq!(address.city(), "Anytown");
        assert_eq!(address.state(), "CA");
        assert_eq!(address.postal_code(), "90210");
        assert_eq!(address.country(), "USA");
    }

    #[test]
    fn test_components_are_trimmed() {
        let address =
            Address::from("  123 Main St  ", " Anytown ", " CA ", " 90210 ", " USA ").unwrap();
        assert_eq!(address.street(), "123 Main St");
        assert_eq!(address.country(), "USA");
    }

    #[test]
    fn test_every_component_is_required() {
        assert!(Address::from("", "Anytown", "CA", "90210", "USA").is_err());
        assert!(Address::from("123 Main St", " ", "CA", "90210", "USA").is_err());
        assert!(Address::from("123 Main St", "Anytown", "", "90210", "USA").is_err());
        assert!(Address::from("123 Main St", "Anytown", "CA", "", "USA").is_err());
        assert!(Address::from("123 Main St", "Anytown", "CA", "90210", "\t").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = Address::from("123 Main St", "Anytown", "CA", "", "USA").unwrap_err();
        assert_eq!(err.to_string(), "Postal code cannot be empty.");
    }

    #[test]
    fn test_display_format() {
        let address = test_address();
        assert_eq!(address.to_string(), "123 Main St, Anytown, CA 90210, USA");
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(test_address(), test_address());
        let other = Address::from("456 Oak Ave", "Anytown", "CA", "90210", "USA").unwrap();
        assert_ne!(test_address(), other);
    }
}
