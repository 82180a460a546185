//! Roster entity
//!
//! The ordered collection of customers and every pure operation over it:
//! add, update, remove, filter, search, and aggregation. No I/O here;
//! persistence goes through the `CustomerStore` port.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StatusFilter;
use crate::error::{DishdeskError, DishdeskResult};

use super::customer::{Customer, CustomerDraft, CustomerUpdate, Purchase};

/// Aggregate statistics over a roster
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub revenue: f64,
}

/// Ordered customer collection, unique by `id`, display order = insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    customers: Vec<Customer>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Add a new customer at the end of the collection.
    ///
    /// Rejects a duplicate `account_id` with `DuplicateAccountId` and leaves
    /// the roster untouched - no partial insert.
    pub fn add(&mut self, draft: CustomerDraft) -> DishdeskResult<&Customer> {
        if self
            .customers
            .iter()
            .any(|c| c.account_id == draft.account_id)
        {
            return Err(DishdeskError::DuplicateAccountId {
                account_id: draft.account_id,
            });
        }

        self.customers.push(draft.into_customer());
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Replace the editable fields of the customer with `id`, optionally
    /// appending one purchase to its history. Position in the collection
    /// is unchanged; prior history entries are never touched.
    pub fn update(
        &mut self,
        id: &str,
        update: CustomerUpdate,
        purchase: Option<Purchase>,
    ) -> DishdeskResult<&Customer> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DishdeskError::NotFound { id: id.to_string() })?;

        update.apply_to(customer);
        if let Some(purchase) = purchase {
            customer.purchase_history.push(purchase);
        }
        Ok(customer)
    }

    /// Remove the customer with `id`. Idempotent: a missing id is a silent
    /// no-op. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        self.customers.len() != len_before
    }

    /// Customers passing the status filter, original order preserved
    pub fn filter(&self, filter: StatusFilter) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| filter.matches(c.connection_status))
            .collect()
    }

    /// Case-insensitive substring search over name, contact number, account
    /// id, and email. An empty or whitespace-only query matches nothing
    /// (distinct from "match everything"). Order preserved, no ranking.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.customers
            .iter()
            .filter(|c| c.matches_query(&query))
            .collect()
    }

    /// Total count, active count, and revenue (sum of every purchase amount
    /// across every customer). Stable under reordering; an empty roster is
    /// all zeroes.
    pub fn stats(&self) -> RosterStats {
        RosterStats {
            total: self.customers.len(),
            active: self
                .customers
                .iter()
                .filter(|c| c.connection_status.is_active())
                .count(),
            revenue: self.customers.iter().map(Customer::total_paid).sum(),
        }
    }
}
