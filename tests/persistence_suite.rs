mod common;

use std::fs;

use common::{date, entry, setup_file_manager};
use household_core::{
    ledger::{EntryKind, Responsible},
    storage::{DocumentStore, JsonFileStore},
    FinanceError, HouseholdManager,
};

#[test]
fn saving_a_loaded_document_changes_nothing() {
    let (manager, path) = setup_file_manager();
    manager
        .record(entry(EntryKind::Income, date(2025, 4, 2), 900.0, Responsible::Both))
        .unwrap();
    manager.contribute_to_goal(1, 250.0).unwrap();

    let store = JsonFileStore::new(&path);
    let loaded = store.load().unwrap().expect("document stored");
    let before = fs::read_to_string(&path).unwrap();
    store.save(&loaded).unwrap();
    let after = fs::read_to_string(&path).unwrap();

    assert_eq!(before, after);
    assert_eq!(store.load().unwrap(), Some(loaded));
}

#[test]
fn stored_json_keeps_camel_case_fields_and_plain_dates() {
    let (manager, path) = setup_file_manager();
    manager
        .record(entry(EntryKind::Expense, date(2025, 5, 9), 12.5, Responsible::User1))
        .unwrap();
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"monthlyContribution\""));
    assert!(json.contains("\"type\": \"expense\""));
    assert!(json.contains("\"date\": \"2025-05-09\""));
}

#[test]
fn corrupt_file_is_left_untouched() {
    let (_, path) = setup_file_manager();
    fs::write(&path, "{ not json").unwrap();

    let manager = HouseholdManager::new(Box::new(JsonFileStore::new(&path)), "Lucas", "Cecília");
    let result =
        manager.record(entry(EntryKind::Income, date(2025, 1, 1), 1.0, Responsible::User2));

    assert!(matches!(result, Err(FinanceError::Persistence(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn rfc3339_dates_are_read_as_calendar_dates() {
    let (manager, path) = setup_file_manager();
    manager.document().unwrap();
    let json = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["transactions"] = serde_json::json!([{
        "id": 1,
        "type": "income",
        "date": "2025-06-30T12:00:00.000Z",
        "description": "Salary",
        "category": "Salário",
        "amount": 100.0,
        "payment": "pix",
        "responsible": "user1"
    }]);
    fs::write(&path, value.to_string()).unwrap();

    let document = manager.document().unwrap();
    assert_eq!(document.transactions[0].date, date(2025, 6, 30));
}
