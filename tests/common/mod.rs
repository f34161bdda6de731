#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use household_core::{
    ledger::{EntryKind, NewTransaction, Responsible},
    storage::JsonFileStore,
    HouseholdManager,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Manager backed by a JSON file in a fresh directory.
pub fn setup_file_manager() -> (HouseholdManager, PathBuf) {
    let base = test_dir();
    let store = JsonFileStore::in_dir(&base).expect("create json store");
    let path = store.path().to_path_buf();
    (HouseholdManager::new(Box::new(store), "Lucas", "Cecília"), path)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn entry(kind: EntryKind, on: NaiveDate, amount: f64, who: Responsible) -> NewTransaction {
    NewTransaction::new(kind, on, amount, who)
        .with_description("test entry")
        .with_category("Outros")
        .with_payment("pix")
}
