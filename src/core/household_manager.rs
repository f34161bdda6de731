use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::{info, warn};

use crate::core::services::{
    DashboardSummary, GoalService, LookupService, Period, PeriodService, PeriodView,
    SummaryService, TransactionService,
};
use crate::errors::{FinanceError, Result};
use crate::ledger::{
    Category, EntryKind, FinancialDocument, Goal, NewTransaction, Transaction, TransactionDraft,
};
use crate::storage::DocumentStore;

pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    Utc::now().timestamp_millis()
}

/// Facade that runs every operation as load, mutate, save against an
/// injected store, serialized by one in-process lock.
pub struct HouseholdManager {
    storage: Box<dyn DocumentStore>,
    lock: Mutex<()>,
    user1_name: String,
    user2_name: String,
    clock: Clock,
}

impl HouseholdManager {
    pub fn new(
        storage: Box<dyn DocumentStore>,
        user1_name: impl Into<String>,
        user2_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            lock: Mutex::new(()),
            user1_name: user1_name.into(),
            user2_name: user2_name.into(),
            clock: system_clock,
        }
    }

    /// Replaces the millisecond clock used for transaction ids.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &dyn DocumentStore {
        self.storage.as_ref()
    }

    /// Current document, bootstrapping and persisting the default one when the
    /// store is empty.
    pub fn document(&self) -> Result<FinancialDocument> {
        let _guard = self.acquire()?;
        self.load_or_bootstrap()
    }

    /// Runs `mutate` on the stored document and writes it back only when the
    /// closure succeeds.
    pub fn update<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut FinancialDocument) -> Result<T>,
    {
        let _guard = self.acquire()?;
        let mut document = self.load_or_bootstrap()?;
        let value = mutate(&mut document)?;
        self.storage.save(&document)?;
        Ok(value)
    }

    /// Validates form input and records the transaction.
    pub fn add_transaction(&self, draft: &TransactionDraft) -> Result<Transaction> {
        let transaction = draft.validate()?;
        self.record(transaction)
    }

    pub fn record(&self, transaction: NewTransaction) -> Result<Transaction> {
        let now = (self.clock)();
        self.update(|document| {
            let id = TransactionService::add(document, transaction, now);
            document
                .transaction(id)
                .cloned()
                .ok_or(FinanceError::TransactionNotFound(id))
        })
    }

    pub fn remove_transaction(&self, id: i64) -> Result<Transaction> {
        self.update(|document| TransactionService::remove_transaction(document, id))
    }

    pub fn contribute_to_goal(&self, goal_id: u64, amount: f64) -> Result<Goal> {
        self.update(|document| {
            GoalService::contribute_to_goal(document, goal_id, amount).map(Goal::clone)
        })
    }

    pub fn filter_by_period(&self, period: Period) -> Result<PeriodView> {
        let document = self.document()?;
        Ok(PeriodService::filter_by_period(&document, period))
    }

    pub fn transactions_by_month(&self, month: u32, year: i32) -> Result<Vec<Transaction>> {
        let document = self.document()?;
        Ok(PeriodService::transactions_by_month(&document, month, year)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn categories_by_type(&self, kind: EntryKind) -> Result<Vec<Category>> {
        let document = self.document()?;
        Ok(LookupService::categories_by_type(&document, kind)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Dashboard figures for `period`, computed over the filtered view.
    pub fn dashboard(&self, period: Period) -> Result<DashboardSummary> {
        let document = self.document()?;
        let view = PeriodService::filter_by_period(&document, period);
        Ok(SummaryService::dashboard(&view.to_document(&document)))
    }

    fn acquire(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| FinanceError::Persistence("household lock poisoned".into()))
    }

    fn load_or_bootstrap(&self) -> Result<FinancialDocument> {
        match self.storage.load() {
            Ok(Some(document)) => Ok(document),
            Ok(None) => {
                let document = FinancialDocument::bootstrap(&self.user1_name, &self.user2_name);
                self.storage.save(&document)?;
                info!(store = %self.storage.describe(), "bootstrapped default financial document");
                Ok(document)
            }
            Err(err) => {
                warn!(store = %self.storage.describe(), error = %err, "failed to load financial document");
                Err(err)
            }
        }
    }
}
