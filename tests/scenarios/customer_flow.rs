//! Customer lifecycle against the on-disk store.

use std::fs;

use tempfile::tempdir;

use dishdesk::application::{CustomerUseCase, PaymentInput};
use dishdesk::infrastructure::JsonCustomerStore;
use dishdesk::{ConnectionStatus, CustomerUpdate, DishdeskError, StatusFilter};

use crate::common::draft;

#[test]
fn first_run_seeds_demo_data_and_persists_it() {
    let dir = tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().to_path_buf());
    let use_case = CustomerUseCase::new(store);

    let roster = use_case.bootstrap().unwrap();
    assert!(!roster.is_empty());

    // A second store over the same directory sees the seeded file.
    let reopened = CustomerUseCase::new(JsonCustomerStore::new(dir.path().to_path_buf()));
    assert_eq!(reopened.bootstrap().unwrap(), roster);
}

#[test]
fn add_update_pay_delete_round_trip() {
    let dir = tempdir().unwrap();
    let use_case = CustomerUseCase::new(JsonCustomerStore::new(dir.path().to_path_buf()));

    let added = use_case
        .add(draft("A1", "John", ConnectionStatus::Active))
        .unwrap();
    assert_eq!(added.id, "A1");

    // Record a 45.0 payment, then a 50.0 one; revenue tracks both.
    let update = CustomerUpdate::from_customer(&added);
    use_case
        .update("A1", update.clone(), Some(PaymentInput::new("Recharge", "45")))
        .unwrap();
    let stats = use_case.stats().unwrap();
    assert_eq!((stats.total, stats.active), (1, 1));
    assert_eq!(stats.revenue, 45.0);

    let updated = use_case
        .update("A1", update, Some(PaymentInput::new("Recharge", "50")))
        .unwrap();
    assert_eq!(updated.purchase_history.len(), 2);
    assert_eq!(use_case.stats().unwrap().revenue, 95.0);

    // Double delete: first removes, second is a silent no-op.
    assert!(use_case.delete("A1").unwrap());
    assert!(!use_case.delete("A1").unwrap());
    assert_eq!(use_case.stats().unwrap().total, 0);
}

#[test]
fn duplicate_add_leaves_stored_file_byte_for_byte_unchanged() {
    let dir = tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().to_path_buf());
    let path = store.path().clone();
    let use_case = CustomerUseCase::new(store);

    use_case
        .add(draft("A1", "John", ConnectionStatus::Active))
        .unwrap();
    let before = fs::read(&path).unwrap();

    let err = use_case
        .add(draft("A1", "Impostor", ConnectionStatus::Pending))
        .unwrap_err();
    assert!(matches!(err, DishdeskError::DuplicateAccountId { .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(use_case.stats().unwrap().total, 1);
}

#[test]
fn invalid_payment_amount_changes_nothing_on_disk() {
    let dir = tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().to_path_buf());
    let path = store.path().clone();
    let use_case = CustomerUseCase::new(store);

    let added = use_case
        .add(draft("A1", "John", ConnectionStatus::Active))
        .unwrap();
    let before = fs::read(&path).unwrap();

    let err = use_case
        .update(
            "A1",
            CustomerUpdate::from_customer(&added),
            Some(PaymentInput::new("Recharge", "-10")),
        )
        .unwrap_err();
    assert!(matches!(err, DishdeskError::InvalidAmount { .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn search_and_filter_read_back_from_disk() {
    let dir = tempdir().unwrap();
    let use_case = CustomerUseCase::new(JsonCustomerStore::new(dir.path().to_path_buf()));

    use_case
        .add(draft("A1", "John Mathew", ConnectionStatus::Active))
        .unwrap();
    use_case
        .add(draft("A2", "Jane Doe", ConnectionStatus::Pending))
        .unwrap();

    let hits = use_case.search("MATH").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "A1");

    assert!(use_case.search("   ").unwrap().is_empty());

    let pending = use_case
        .list(StatusFilter::Only(ConnectionStatus::Pending))
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "A2");

    assert_eq!(use_case.list(StatusFilter::All).unwrap().len(), 2);
}
