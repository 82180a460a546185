//! Customer use case input types

use crate::domain::value_objects::PaymentMode;

/// Raw payment form input: the amount arrives as the operator typed it and
/// is validated (`InvalidAmount`) before anything is mutated.
#[derive(Debug, Clone)]
pub struct PaymentInput {
    pub description: String,
    pub amount: String,
    pub payment_mode: PaymentMode,
}

impl PaymentInput {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            payment_mode: PaymentMode::default(),
        }
    }

    pub fn with_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }
}
