//! Demo dataset
//!
//! Seeded into the store on first run (or whenever the stored collection is
//! empty) so the tool is explorable out of the box.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Customer, Purchase, Roster};
use crate::domain::value_objects::{ConnectionStatus, PaymentMode, Provider};

fn day(year: i32, month: u32, dayofmonth: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dayofmonth, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_purchase(id: &str, date: DateTime<Utc>, amount: f64, mode: PaymentMode) -> Purchase {
    Purchase {
        id: id.to_string(),
        date,
        description: "Monthly recharge".to_string(),
        amount,
        payment_mode: mode,
    }
}

/// The fixed demo roster
pub fn demo_roster() -> Roster {
    let customers = vec![
        Customer {
            id: "CTV-1001".to_string(),
            name: "Ravi Kumar".to_string(),
            contact_number: "9876543210".to_string(),
            account_id: "CTV-1001".to_string(),
            city: "Chennai".to_string(),
            email: Some("ravi.kumar@example.com".to_string()),
            connection_status: ConnectionStatus::Active,
            provider: Provider::SunDirect,
            subscription_price: None,
            installation_date: day(2023, 1, 15),
            renewal_date: day(2025, 1, 15),
            purchase_history: vec![
                seed_purchase("P1700000000001", day(2024, 11, 15), 35.0, PaymentMode::Online),
                seed_purchase("P1702600000002", day(2024, 12, 15), 35.0, PaymentMode::Cash),
            ],
        },
        Customer {
            id: "CTV-1002".to_string(),
            name: "Priya Sharma".to_string(),
            contact_number: "9123456780".to_string(),
            account_id: "CTV-1002".to_string(),
            city: "Mumbai".to_string(),
            email: Some("priya.sharma@example.com".to_string()),
            connection_status: ConnectionStatus::Active,
            provider: Provider::DishTv,
            // Premium tier, priced above the base table entry.
            subscription_price: Some(65.0),
            installation_date: day(2022, 6, 1),
            renewal_date: day(2025, 6, 1),
            purchase_history: vec![seed_purchase(
                "P1705200000003",
                day(2025, 1, 14),
                65.0,
                PaymentMode::Card,
            )],
        },
        Customer {
            id: "CTV-1003".to_string(),
            name: "Arjun Perera".to_string(),
            contact_number: "0771234567".to_string(),
            account_id: "CTV-1003".to_string(),
            city: "Colombo".to_string(),
            email: None,
            connection_status: ConnectionStatus::Pending,
            provider: Provider::DialogTv,
            subscription_price: None,
            installation_date: day(2025, 2, 20),
            renewal_date: day(2026, 2, 20),
            purchase_history: Vec::new(),
        },
    ];

    Roster::from_customers(customers)
}
