#![doc(test(attr(deny(warnings))))]

//! Household finance core: a shared two-person ledger whose per-user income
//! and expense totals are derived from responsibility-split transactions,
//! with month filtering, savings goals, and a single JSON document store.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::household_manager::HouseholdManager;
pub use crate::core::services::{
    GoalService, LookupService, Period, PeriodService, PeriodView, SummaryService,
    TransactionService,
};
pub use errors::{FinanceError, ValidationError};
pub use ledger::FinancialDocument;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Household core tracing initialized.");
    });
}
