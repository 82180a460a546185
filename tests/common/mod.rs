//! Shared fixtures for integration tests.

use chrono::{TimeZone, Utc};

use dishdesk::{ConnectionStatus, CustomerDraft, Provider};

pub fn draft(account_id: &str, name: &str, status: ConnectionStatus) -> CustomerDraft {
    let installed = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    CustomerDraft {
        name: name.to_string(),
        contact_number: "9876543210".to_string(),
        account_id: account_id.to_string(),
        city: "Chennai".to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        connection_status: status,
        provider: Provider::DishTv,
        subscription_price: None,
        installation_date: installed,
        renewal_date: installed,
    }
}
