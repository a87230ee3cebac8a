//! Phone Number Value Object
//!
//! Stored digits-only: any formatting characters in the input
//! (spaces, dashes, parentheses, a leading `+`) are stripped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::domain_error::{DomainError, DomainResult};

/// Minimum digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 8;

/// Maximum digits in a phone number (ITU-T E.164)
pub const PHONE_MAX_DIGITS: usize = 15;

/// Phone number value object (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new phone number with validation
    ///
    /// Rejects blank input before stripping; requires 8-15 digits after
    /// stripping all non-digit characters.
    pub fn from(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref();

        if value.trim().is_empty() {
            return Err(DomainError::new("Phone number cannot be empty."));
        }

        let digits_only: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits_only.len() < PHONE_MIN_DIGITS || digits_only.len() > PHONE_MAX_DIGITS {
            return Err(DomainError::new(
                "Phone number must be between 8 and 15 digits.",
            ));
        }

        Ok(Self(digits_only))
    }

    /// Create from an optional input; `None` or blank input yields `None`
    pub fn from_nullable(value: Option<&str>) -> DomainResult<Option<Self>> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::from(v).map(Some),
            _ => Ok(None),
        }
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        PhoneNumber::from(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::from(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}
