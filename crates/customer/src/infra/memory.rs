//! In-Memory Repository
//!
//! Thread-safe store that honors the staged-write contract: `add` and
//! `update` only record intent, and `commit` validates and applies the
//! whole batch under a single write lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use kernel::id::CustomerId;
use kernel::value_object::email::Email;

use crate::domain::aggregate::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult};

#[derive(Debug, Clone)]
enum StagedWrite {
    Insert(Customer),
    Update(Customer),
}

impl StagedWrite {
    fn customer(&self) -> &Customer {
        match self {
            Self::Insert(c) | Self::Update(c) => c,
        }
    }
}

#[derive(Default)]
struct State {
    store: HashMap<CustomerId, Customer>,
    staged: Vec<StagedWrite>,
}

/// In-memory customer repository
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed customers (staged writes excluded)
    pub async fn committed_count(&self) -> usize {
        self.state.read().await.store.len()
    }

    /// Number of writes staged but not yet committed
    pub async fn staged_count(&self) -> usize {
        self.state.read().await.staged.len()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, customer_id: &CustomerId) -> CustomerResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.store.get(customer_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> CustomerResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.store.values().find(|c| c.email() == email).cloned())
    }

    async fn find_all(&self, is_active: Option<bool>) -> CustomerResult<Vec<Customer>> {
        let state = self.state.read().await;
        let mut customers: Vec<Customer> = state
            .store
            .values()
            .filter(|c| is_active.is_none_or(|active| c.is_active() == active))
            .cloned()
            .collect();
        customers.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(customers)
    }

    async fn add(&self, customer: &Customer) -> CustomerResult<()> {
        let mut state = self.state.write().await;
        state.staged.push(StagedWrite::Insert(customer.clone()));
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> CustomerResult<()> {
        let mut state = self.state.write().await;
        state.staged.push(StagedWrite::Update(customer.clone()));
        Ok(())
    }

    async fn commit(&self) -> CustomerResult<()> {
        let mut state = self.state.write().await;

        // Validate the whole batch before applying any of it. An email must
        // be unique across the committed store (ignoring rows the batch
        // itself replaces) and within the batch.
        for (i, write) in state.staged.iter().enumerate() {
            let candidate = write.customer();

            let clash_in_store = state.store.values().any(|existing| {
                existing.id() != candidate.id() && existing.email() == candidate.email()
            });
            let clash_in_batch = state.staged[..i].iter().any(|earlier| {
                let earlier = earlier.customer();
                earlier.id() != candidate.id() && earlier.email() == candidate.email()
            });

            if clash_in_store || clash_in_batch {
                tracing::warn!(
                    customer_id = %candidate.id(),
                    "Commit rejected, email already in use"
                );
                // Staged writes are retained so the caller can inspect or retry
                return Err(CustomerError::EmailInUse);
            }
        }

        let staged: Vec<StagedWrite> = state.staged.drain(..).collect();
        for write in staged {
            match write {
                StagedWrite::Insert(customer) | StagedWrite::Update(customer) => {
                    state.store.insert(*customer.id(), customer);
                }
            }
        }

        Ok(())
    }
}
