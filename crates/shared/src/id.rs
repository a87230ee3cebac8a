//! Common ID Types
//!
//! Type-safe ID wrappers for aggregate identities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::error::domain_error::{DomainError, DomainResult};

/// Generic typed ID wrapper
///
/// Wraps a UUID and is never the nil (all-zero) value: `new` generates a
/// random v4, and `from_uuid` rejects nil input.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type CustomerId = Id<markers::Customer>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

// Manual impls: derives would require `T: Clone` etc. on the marker types,
// but the marker is phantom and never stored.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID, rejecting the nil value
    pub fn from_uuid(uuid: Uuid) -> DomainResult<Self> {
        if uuid.is_nil() {
            return Err(DomainError::new("Identifier cannot be the nil UUID."));
        }
        Ok(Self {
            value: uuid,
            _marker: PhantomData,
        })
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> TryFrom<Uuid> for Id<T> {
    type Error = DomainError;

    fn try_from(uuid: Uuid) -> DomainResult<Self> {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different aggregate IDs
pub mod markers {
    /// Marker for Customer IDs
    pub struct Customer;

    /// Marker for Order IDs
    pub struct Order;

    /// Marker for Product IDs
    pub struct Product;

    /// Marker for embedded Address IDs
    pub struct Address;
}

/// Type aliases for common IDs
pub type CustomerId = Id<markers::Customer>;
pub type OrderId = Id<markers::Order>;
pub type ProductId = Id<markers::Product>;
pub type AddressId = Id<markers::Address>;
