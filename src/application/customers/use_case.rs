//! Customer Use Case
//!
//! Orchestrates roster operations against the persistent store: mutate in
//! memory, then rewrite the whole collection. Mutations are all-or-nothing;
//! a failed operation never saves. First-run seeding happens in
//! `bootstrap`, called once per invocation before any operation runs.

use crate::domain::entities::{Customer, CustomerDraft, CustomerUpdate, Purchase, Roster, RosterStats};
use crate::domain::ports::CustomerStore;
use crate::domain::value_objects::StatusFilter;
use crate::error::{DishdeskError, DishdeskResult};

use super::options::PaymentInput;
use super::seed::demo_roster;

/// Customer use case - CRUD and queries over the persisted roster
pub struct CustomerUseCase<CS>
where
    CS: CustomerStore,
{
    store: CS,
}

impl<CS> CustomerUseCase<CS>
where
    CS: CustomerStore,
{
    pub fn new(store: CS) -> Self {
        Self { store }
    }

    /// Seed the demo dataset when the stored collection is missing or
    /// empty, persisting it immediately. Returns the bootstrapped roster.
    pub fn bootstrap(&self) -> DishdeskResult<Roster> {
        let roster = self.store.load()?;
        if !roster.is_empty() {
            return Ok(roster);
        }

        let seeded = demo_roster();
        self.store.save(&seeded)?;
        Ok(seeded)
    }

    /// Add a new customer. Duplicate account ids fail with
    /// `DuplicateAccountId` and nothing is written.
    pub fn add(&self, draft: CustomerDraft) -> DishdeskResult<Customer> {
        let mut roster = self.store.load()?;
        let added = roster.add(draft)?.clone();
        self.store.save(&roster)?;
        Ok(added)
    }

    /// Replace a customer's editable fields and optionally record one
    /// payment. The payment amount is validated before any mutation.
    pub fn update(
        &self,
        id: &str,
        update: CustomerUpdate,
        payment: Option<PaymentInput>,
    ) -> DishdeskResult<Customer> {
        let purchase = match payment {
            Some(input) => {
                let amount = Purchase::parse_amount(&input.amount)?;
                Some(Purchase::new(input.description, amount, input.payment_mode))
            }
            None => None,
        };

        let mut roster = self.store.load()?;
        let updated = roster.update(id, update, purchase)?.clone();
        self.store.save(&roster)?;
        Ok(updated)
    }

    /// Remove a customer. Idempotent: deleting a missing id is a no-op and
    /// returns `false` without error or a write.
    pub fn delete(&self, id: &str) -> DishdeskResult<bool> {
        let mut roster = self.store.load()?;
        if !roster.remove(id) {
            return Ok(false);
        }
        self.store.save(&roster)?;
        Ok(true)
    }

    /// Fetch one customer by id
    pub fn get(&self, id: &str) -> DishdeskResult<Customer> {
        let roster = self.store.load()?;
        roster
            .get(id)
            .cloned()
            .ok_or_else(|| DishdeskError::NotFound { id: id.to_string() })
    }

    /// Customers passing a status filter, insertion order preserved
    pub fn list(&self, filter: StatusFilter) -> DishdeskResult<Vec<Customer>> {
        let roster = self.store.load()?;
        Ok(roster.filter(filter).into_iter().cloned().collect())
    }

    /// Case-insensitive substring search (see `Roster::search`)
    pub fn search(&self, query: &str) -> DishdeskResult<Vec<Customer>> {
        let roster = self.store.load()?;
        Ok(roster.search(query).into_iter().cloned().collect())
    }

    /// Aggregate statistics over the whole roster
    pub fn stats(&self) -> DishdeskResult<RosterStats> {
        Ok(self.store.load()?.stats())
    }
}
