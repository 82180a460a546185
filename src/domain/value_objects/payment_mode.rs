//! PaymentMode value object

use serde::{Deserialize, Serialize};

/// How a payment was made. Online is the default in the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    Cash,
    Card,
    #[default]
    Online,
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "Cash"),
            PaymentMode::Card => write!(f, "Card"),
            PaymentMode::Online => write!(f, "Online"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "card" => Ok(PaymentMode::Card),
            "online" => Ok(PaymentMode::Online),
            other => Err(format!(
                "unknown payment mode '{other}' - expected cash, card, or online"
            )),
        }
    }
}
