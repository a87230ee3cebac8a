//! Customer Aggregate
//!
//! Owns identity, contact details, activation state, and the billing and
//! shipping addresses. Fields are private; every mutation goes through a
//! command method so the invariants cannot be bypassed.
//!
//! The email-change cooldown is evaluated against a caller-supplied
//! timestamp, never an internal clock read, so the aggregate stays
//! deterministic under test.

use chrono::{DateTime, Duration, Utc};

use kernel::error::domain_error::{DomainError, DomainResult};
use kernel::id::CustomerId;
use kernel::value_object::address::Address;
use kernel::value_object::email::Email;
use kernel::value_object::phone_number::PhoneNumber;

use crate::domain::value_object::customer_name::CustomerName;

/// Minimum interval between consecutive email changes
pub const EMAIL_CHANGE_COOLDOWN_DAYS: i64 = 30;

/// Customer aggregate root
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    email: Email,
    /// Set on the first accepted email change after creation and re-set
    /// on every later one. Never pre-populated at construction.
    email_last_changed_at: Option<DateTime<Utc>>,
    home_phone: Option<PhoneNumber>,
    mobile_phone: Option<PhoneNumber>,
    is_active: bool,
    billing_address: Option<Address>,
    shipping_address: Option<Address>,
}

impl Customer {
    /// Create a new customer
    ///
    /// Assigns a fresh identity and starts active, with no addresses and
    /// an unset email-change timestamp.
    pub fn create(
        name: CustomerName,
        email: Email,
        home_phone: Option<PhoneNumber>,
        mobile_phone: Option<PhoneNumber>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name,
            email,
            email_last_changed_at: None,
            home_phone,
            mobile_phone,
            is_active: true,
            billing_address: None,
            shipping_address: None,
        }
    }

    /// Update the customer's contact details
    ///
    /// Phones are replaced whenever the method succeeds. An unchanged
    /// email leaves the email path untouched (no cooldown check, no
    /// timestamp update). A changed email is accepted unconditionally the
    /// first time; afterwards only when at least 30 days have elapsed
    /// since the previous change, measured against `now`.
    pub fn update_contact_details(
        &mut self,
        new_email: Email,
        home_phone: Option<PhoneNumber>,
        mobile_phone: Option<PhoneNumber>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.email != new_email {
            // Only enforce the 30-day rule if the email was previously changed
            if let Some(last_changed) = self.email_last_changed_at {
                let since_last_change = now - last_changed;
                if since_last_change < Duration::days(EMAIL_CHANGE_COOLDOWN_DAYS) {
                    return Err(DomainError::new(format!(
                        "Email can only be changed once every {EMAIL_CHANGE_COOLDOWN_DAYS} days. \
                         Last changed {} days ago.",
                        since_last_change.num_days()
                    )));
                }
            }

            self.email = new_email;
            self.email_last_changed_at = Some(now);
        }

        self.home_phone = home_phone;
        self.mobile_phone = mobile_phone;
        Ok(())
    }

    /// Update the customer's name
    pub fn update_name(&mut self, new_name: CustomerName) {
        self.name = new_name;
    }

    /// Replace both addresses
    ///
    /// Full replacement, not a merge: passing `None` clears that address.
    pub fn update_address_details(
        &mut self,
        billing_address: Option<Address>,
        shipping_address: Option<Address>,
    ) {
        self.billing_address = billing_address;
        self.shipping_address = shipping_address;
    }

    /// Activate the customer
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Deactivate the customer (soft state, not removal)
    pub fn deactivate(&mut self) {
        // TODO: reject deactivation while the customer has undelivered
        // orders; needs an order-lookup collaborator from the order context
        self.is_active = false;
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn email_last_changed_at(&self) -> Option<DateTime<Utc>> {
        self.email_last_changed_at
    }

    pub fn home_phone(&self) -> Option<&PhoneNumber> {
        self.home_phone.as_ref()
    }

    pub fn mobile_phone(&self) -> Option<&PhoneNumber> {
        self.mobile_phone.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    pub fn shipping_address(&self) -> Option<&Address> {
        self.shipping_address.as_ref()
    }
}
