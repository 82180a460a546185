//! Customer and Purchase entities
//!
//! A `Customer` is identified by `id`, which equals `account_id` at creation
//! and never changes. `purchase_history` is append-only: entries are created
//! as a side effect of an update and are never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConnectionStatus, PaymentMode, Provider};
use crate::error::{DishdeskError, DishdeskResult};

/// A single payment/transaction record attached to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub payment_mode: PaymentMode,
}

impl Purchase {
    /// Create a purchase stamped with the current time.
    ///
    /// Ids follow the original scheme: `P` plus the creation unix millis.
    pub fn new(description: String, amount: f64, payment_mode: PaymentMode) -> Self {
        let now = Utc::now();
        Self {
            id: format!("P{}", now.timestamp_millis()),
            date: now,
            description,
            amount,
            payment_mode,
        }
    }

    /// Parse a raw amount string into a non-negative number.
    ///
    /// Rejects anything that is not a finite number >= 0 with
    /// `InvalidAmount`, before any purchase is constructed.
    pub fn parse_amount(input: &str) -> DishdeskResult<f64> {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
            _ => Err(DishdeskError::InvalidAmount {
                input: input.to_string(),
            }),
        }
    }
}

/// A subscriber record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, equal to `account_id` at creation; immutable
    pub id: String,
    pub name: String,
    pub contact_number: String,
    /// Cable/DTH account number - the natural business key, unique per roster
    pub account_id: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub connection_status: ConnectionStatus,
    pub provider: Provider,
    /// Custom monthly price; takes precedence over the provider table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_price: Option<f64>,
    pub installation_date: DateTime<Utc>,
    pub renewal_date: DateTime<Utc>,
    #[serde(default)]
    pub purchase_history: Vec<Purchase>,
}

impl Customer {
    /// Monthly amount attributable to this customer: the explicit override
    /// when set, else the provider's base price.
    pub fn effective_price(&self) -> f64 {
        self.subscription_price
            .unwrap_or_else(|| self.provider.base_price())
    }

    /// Sum of all recorded purchase amounts
    pub fn total_paid(&self) -> f64 {
        self.purchase_history.iter().map(|p| p.amount).sum()
    }

    /// Case-insensitive substring match of `query` against name, contact
    /// number, account id, and email (when present). `query` must already
    /// be trimmed and lowercased.
    pub(crate) fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.contact_number.to_lowercase().contains(query)
            || self.account_id.to_lowercase().contains(query)
            || self
                .email
                .as_ref()
                .is_some_and(|email| email.to_lowercase().contains(query))
    }
}

/// Input for creating a customer: every field except the purchase history
/// (which starts empty) and `id` (derived from `account_id`).
#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub name: String,
    pub contact_number: String,
    pub account_id: String,
    pub city: String,
    pub email: Option<String>,
    pub connection_status: ConnectionStatus,
    pub provider: Provider,
    pub subscription_price: Option<f64>,
    pub installation_date: DateTime<Utc>,
    pub renewal_date: DateTime<Utc>,
}

impl CustomerDraft {
    /// Materialize the draft into a fresh customer with an empty history
    pub(crate) fn into_customer(self) -> Customer {
        Customer {
            id: self.account_id.clone(),
            name: self.name,
            contact_number: self.contact_number,
            account_id: self.account_id,
            city: self.city,
            email: self.email,
            connection_status: self.connection_status,
            provider: self.provider,
            subscription_price: self.subscription_price,
            installation_date: self.installation_date,
            renewal_date: self.renewal_date,
            purchase_history: Vec::new(),
        }
    }
}

/// Full replacement of a customer's editable fields.
///
/// `id` and `account_id` are deliberately absent: the identifier is
/// immutable and the account number cannot be edited after creation.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: String,
    pub contact_number: String,
    pub city: String,
    pub email: Option<String>,
    pub connection_status: ConnectionStatus,
    pub provider: Provider,
    pub subscription_price: Option<f64>,
    pub installation_date: DateTime<Utc>,
    pub renewal_date: DateTime<Utc>,
}

impl CustomerUpdate {
    /// Snapshot the editable fields of an existing customer, for callers
    /// that pre-fill an edit form before applying changes.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            contact_number: customer.contact_number.clone(),
            city: customer.city.clone(),
            email: customer.email.clone(),
            connection_status: customer.connection_status,
            provider: customer.provider,
            subscription_price: customer.subscription_price,
            installation_date: customer.installation_date,
            renewal_date: customer.renewal_date,
        }
    }

    pub(crate) fn apply_to(self, customer: &mut Customer) {
        customer.name = self.name;
        customer.contact_number = self.contact_number;
        customer.city = self.city;
        customer.email = self.email;
        customer.connection_status = self.connection_status;
        customer.provider = self.provider;
        customer.subscription_price = self.subscription_price;
        customer.installation_date = self.installation_date;
        customer.renewal_date = self.renewal_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(account_id: &str) -> CustomerDraft {
        let installed = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        CustomerDraft {
            name: "John".to_string(),
            contact_number: "9876543210".to_string(),
            account_id: account_id.to_string(),
            city: "Chennai".to_string(),
            email: Some("john@example.com".to_string()),
            connection_status: ConnectionStatus::Active,
            provider: Provider::DishTv,
            subscription_price: None,
            installation_date: installed,
            renewal_date: installed,
        }
    }

    #[test]
    fn test_id_equals_account_id_at_creation() {
        let customer = draft("CTV-0001").into_customer();
        assert_eq!(customer.id, "CTV-0001");
        assert_eq!(customer.account_id, "CTV-0001");
        assert!(customer.purchase_history.is_empty());
    }

    #[test]
    fn test_effective_price_falls_back_to_provider_table() {
        let customer = draft("CTV-0001").into_customer();
        assert_eq!(customer.effective_price(), 45.0);
    }

    #[test]
    fn test_effective_price_override_takes_precedence() {
        let mut customer = draft("CTV-0001").into_customer();
        customer.subscription_price = Some(65.0);
        assert_eq!(customer.effective_price(), 65.0);

        // A zero override is still an override.
        customer.subscription_price = Some(0.0);
        assert_eq!(customer.effective_price(), 0.0);
    }

    #[test]
    fn test_parse_amount_accepts_non_negative_numbers() {
        assert_eq!(Purchase::parse_amount("50").unwrap(), 50.0);
        assert_eq!(Purchase::parse_amount(" 12.75 ").unwrap(), 12.75);
        assert_eq!(Purchase::parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        for input in ["", "abc", "-1", "NaN", "inf", "12,50"] {
            assert!(
                matches!(
                    Purchase::parse_amount(input),
                    Err(DishdeskError::InvalidAmount { .. })
                ),
                "expected InvalidAmount for {input:?}"
            );
        }
    }

    #[test]
    fn test_purchase_id_uses_original_scheme() {
        let purchase = Purchase::new("Recharge".to_string(), 45.0, PaymentMode::Online);
        assert!(purchase.id.starts_with('P'));
        assert!(purchase.id[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_customer_serde_round_trip() {
        let mut customer = draft("CTV-0001").into_customer();
        customer
            .purchase_history
            .push(Purchase::new("Recharge".to_string(), 45.0, PaymentMode::Cash));

        let json = serde_json::to_string(&customer).unwrap();
        let restored: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, customer);
    }

    #[test]
    fn test_update_does_not_touch_identity_or_history() {
        let mut customer = draft("CTV-0001").into_customer();
        customer
            .purchase_history
            .push(Purchase::new("Recharge".to_string(), 45.0, PaymentMode::Cash));

        let mut update = CustomerUpdate::from_customer(&customer);
        update.name = "Johnny".to_string();
        update.connection_status = ConnectionStatus::Inactive;
        update.apply_to(&mut customer);

        assert_eq!(customer.name, "Johnny");
        assert_eq!(customer.id, "CTV-0001");
        assert_eq!(customer.account_id, "CTV-0001");
        assert_eq!(customer.purchase_history.len(), 1);
    }
}
