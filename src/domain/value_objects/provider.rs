//! Provider value object - the subscription package a customer is enrolled in
//!
//! Each provider carries a base monthly price and a short list of suggested
//! price tiers. A customer's effective price is their explicit override when
//! set, otherwise the provider's base price (see `Customer::effective_price`).

use serde::{Deserialize, Serialize};

/// Cable/DTH provider (plan identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    DishTv,
    SunDirect,
    Videocon,
    Airtel,
    DialogTv,
}

impl Provider {
    /// All providers, in display order
    pub const ALL: [Provider; 5] = [
        Provider::DishTv,
        Provider::SunDirect,
        Provider::Videocon,
        Provider::Airtel,
        Provider::DialogTv,
    ];

    /// Default monthly subscription price for this provider
    pub fn base_price(&self) -> f64 {
        match self {
            Provider::DishTv => 45.0,
            Provider::SunDirect => 35.0,
            Provider::Videocon => 40.0,
            Provider::Airtel => 50.0,
            Provider::DialogTv => 30.0,
        }
    }

    /// Suggested price tiers offered by this provider.
    ///
    /// Shown to the operator when picking a custom price; overrides are not
    /// required to match a tier.
    pub fn price_tiers(&self) -> [f64; 3] {
        match self {
            Provider::DishTv => [35.0, 45.0, 65.0],
            Provider::SunDirect => [25.0, 35.0, 50.0],
            Provider::Videocon => [30.0, 40.0, 60.0],
            Provider::Airtel => [40.0, 50.0, 70.0],
            Provider::DialogTv => [20.0, 30.0, 45.0],
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::DishTv => write!(f, "Dishtv"),
            Provider::SunDirect => write!(f, "Sun direct"),
            Provider::Videocon => write!(f, "Videocon"),
            Provider::Airtel => write!(f, "Airtel"),
            Provider::DialogTv => write!(f, "Dialogtv"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace([' ', '-', '_'], "").as_str() {
            "dishtv" => Ok(Provider::DishTv),
            "sundirect" => Ok(Provider::SunDirect),
            "videocon" => Ok(Provider::Videocon),
            "airtel" => Ok(Provider::Airtel),
            "dialogtv" => Ok(Provider::DialogTv),
            other => Err(format!(
                "unknown provider '{other}' - expected one of dishtv, sundirect, videocon, airtel, dialogtv"
            )),
        }
    }
}
