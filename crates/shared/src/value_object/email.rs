//! Email Value Object
//!
//! Represents a validated email address.
//! Basic shape validation only (`local@domain.tld`) - deliverability is
//! the concern of whatever sends mail, not the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::domain_error::{DomainError, DomainResult};

/// Email address value object
///
/// Normalized to lowercase at construction, so equality is
/// case-insensitive by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn from(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::new("Email cannot be empty."));
        }

        if !Self::is_valid_format(&value) {
            return Err(DomainError::new("Email format is invalid."));
        }

        Ok(Self(value.to_lowercase()))
    }

    /// Shape check: one `@`, non-empty local part, domain with an
    /// interior dot, no whitespace anywhere
    fn is_valid_format(value: &str) -> bool {
        if value.chars().any(|c| c.is_whitespace()) {
            return false;
        }

        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }

        // The domain needs a dot with at least one character on each side
        match domain.rfind('.') {
            Some(idx) => idx > 0 && idx < domain.len() - 1,
            None => false,
        }
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Email::from(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::from(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
