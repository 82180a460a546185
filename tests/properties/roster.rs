//! Property tests for roster operations.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use dishdesk::{
    ConnectionStatus, Customer, CustomerDraft, CustomerUpdate, PaymentMode, Provider, Purchase,
    Roster, StatusFilter,
};

fn any_status() -> impl Strategy<Value = ConnectionStatus> {
    prop_oneof![
        Just(ConnectionStatus::Active),
        Just(ConnectionStatus::Inactive),
        Just(ConnectionStatus::Pending),
    ]
}

fn any_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,14}").unwrap()
}

fn any_amounts() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..5_000.0, 0..=4)
}

#[derive(Debug, Clone)]
struct Subscriber {
    name: String,
    status: ConnectionStatus,
    amounts: Vec<f64>,
}

fn any_subscriber() -> impl Strategy<Value = Subscriber> {
    (any_name(), any_status(), any_amounts()).prop_map(|(name, status, amounts)| Subscriber {
        name,
        status,
        amounts,
    })
}

fn build_roster(subscribers: &[Subscriber]) -> Roster {
    let installed = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut roster = Roster::new();
    for (i, s) in subscribers.iter().enumerate() {
        let account_id = format!("ACC-{i:04}");
        roster
            .add(CustomerDraft {
                name: s.name.clone(),
                contact_number: format!("90000{i:05}"),
                account_id: account_id.clone(),
                city: "Chennai".to_string(),
                email: None,
                connection_status: s.status,
                provider: Provider::Videocon,
                subscription_price: None,
                installation_date: installed,
                renewal_date: installed,
            })
            .expect("generated account ids are unique");
        let update = CustomerUpdate::from_customer(
            roster.get(&account_id).expect("just added"),
        );
        for amount in &s.amounts {
            roster
                .update(
                    &account_id,
                    update.clone(),
                    Some(Purchase::new(
                        "Recharge".to_string(),
                        *amount,
                        PaymentMode::Online,
                    )),
                )
                .expect("customer exists");
        }
    }
    roster
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any sequence of successful adds, account ids are unique
    /// and a duplicate add leaves the roster exactly as it was.
    #[test]
    fn property_account_ids_stay_unique(
        subscribers in proptest::collection::vec(any_subscriber(), 1..=8),
    ) {
        let mut roster = build_roster(&subscribers);
        let customers: Vec<Customer> = roster.all().to_vec();
        for (i, a) in customers.iter().enumerate() {
            for b in &customers[i + 1..] {
                prop_assert_ne!(&a.account_id, &b.account_id);
            }
        }

        let before = roster.clone();
        let duplicate = CustomerDraft {
            name: "Dup".to_string(),
            contact_number: "1".to_string(),
            account_id: customers[0].account_id.clone(),
            city: "X".to_string(),
            email: None,
            connection_status: ConnectionStatus::Pending,
            provider: Provider::Airtel,
            subscription_price: None,
            installation_date: customers[0].installation_date,
            renewal_date: customers[0].renewal_date,
        };
        prop_assert!(roster.add(duplicate).is_err());
        prop_assert_eq!(roster, before);
    }

    /// PROPERTY: Aggregate statistics do not depend on collection order, and
    /// revenue equals the plain sum of every generated amount.
    #[test]
    fn property_stats_are_reorder_invariant(
        subscribers in proptest::collection::vec(any_subscriber(), 0..=8),
    ) {
        let roster = build_roster(&subscribers);
        let stats = roster.stats();

        let expected_revenue: f64 = subscribers.iter().flat_map(|s| s.amounts.iter()).sum();
        prop_assert!((stats.revenue - expected_revenue).abs() < 1e-6);
        prop_assert_eq!(stats.total, subscribers.len());
        prop_assert_eq!(
            stats.active,
            subscribers.iter().filter(|s| s.status == ConnectionStatus::Active).count()
        );

        let mut reversed: Vec<Customer> = roster.all().to_vec();
        reversed.reverse();
        let backward = Roster::from_customers(reversed).stats();
        prop_assert_eq!(stats.total, backward.total);
        prop_assert_eq!(stats.active, backward.active);
        prop_assert!((stats.revenue - backward.revenue).abs() < 1e-6);
    }

    /// PROPERTY: The "All" filter is the identity on the collection.
    #[test]
    fn property_filter_all_is_identity(
        subscribers in proptest::collection::vec(any_subscriber(), 0..=8),
    ) {
        let roster = build_roster(&subscribers);
        let filtered: Vec<&Customer> = roster.filter(StatusFilter::All);
        prop_assert_eq!(filtered.len(), roster.len());
        for (kept, original) in filtered.iter().zip(roster.all()) {
            prop_assert_eq!(*kept, original);
        }
    }

    /// PROPERTY: Searching for any uppercased substring of a customer's name
    /// finds that customer; whitespace-only queries find nothing.
    #[test]
    fn property_search_is_case_insensitive(
        subscribers in proptest::collection::vec(any_subscriber(), 1..=8),
        pick in 0usize..8,
    ) {
        let roster = build_roster(&subscribers);
        let target = &roster.all()[pick % roster.len()];
        let needle = target.name.trim();
        if !needle.is_empty() {
            let found = roster.search(&needle.to_uppercase());
            prop_assert!(found.iter().any(|c| c.id == target.id));
        }

        prop_assert!(roster.search("  ").is_empty());
    }
}
