//! Month/year views over the transaction list.

use chrono::{Datelike, NaiveDate};

use crate::errors::ValidationError;
use crate::ledger::{FinancialDocument, Transaction, Users};

/// Selection of transactions by calendar period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Month { month: u32, year: Option<i32> },
}

impl Period {
    /// Month `0` is the "all" sentinel; `1..=12` select a calendar month.
    pub fn from_parts(month: u32, year: Option<i32>) -> Result<Self, ValidationError> {
        match month {
            0 => Ok(Period::All),
            1..=12 => Ok(Period::Month { month, year }),
            other => Err(ValidationError::invalid(
                "month",
                format!("{other} is outside 0..=12"),
            )),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Period::All => true,
            Period::Month { month, year } => {
                date.month() == month && year.map_or(true, |year| date.year() == year)
            }
        }
    }
}

/// Derived, read-only view of the document for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodView {
    pub period: Period,
    pub transactions: Vec<Transaction>,
    pub users: Users,
}

impl PeriodView {
    pub fn total_income(&self) -> f64 {
        self.users.total_income()
    }

    pub fn total_expenses(&self) -> f64 {
        self.users.total_expenses()
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// Copies `base` with this view's transactions and totals swapped in, so
    /// document-level reports can run over a single period.
    pub fn to_document(&self, base: &FinancialDocument) -> FinancialDocument {
        FinancialDocument {
            users: self.users.clone(),
            transactions: self.transactions.clone(),
            ..base.clone()
        }
    }
}

pub struct PeriodService;

impl PeriodService {
    /// Builds the view for `period` without touching `document`.
    ///
    /// For a specific month the totals use a flat split: filtered income and
    /// expenses are halved and given to both users regardless of who was
    /// responsible. `Period::All` keeps the document's stored totals.
    pub fn filter_by_period(document: &FinancialDocument, period: Period) -> PeriodView {
        if period == Period::All {
            return PeriodView {
                period,
                transactions: document.transactions.clone(),
                users: document.users.clone(),
            };
        }

        let transactions: Vec<Transaction> = document
            .transactions
            .iter()
            .filter(|txn| period.contains(txn.date))
            .cloned()
            .collect();

        let (income, expenses) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| {
                    if txn.is_income() {
                        (income + txn.amount, expenses)
                    } else {
                        (income, expenses + txn.amount)
                    }
                });

        let mut users = document.users.clone();
        for user in [&mut users.user1, &mut users.user2] {
            user.income = income / 2.0;
            user.expenses = expenses / 2.0;
        }

        PeriodView {
            period,
            transactions,
            users,
        }
    }

    /// Transactions dated in `month` of `year`, in entry order.
    pub fn transactions_by_month(
        document: &FinancialDocument,
        month: u32,
        year: i32,
    ) -> Vec<&Transaction> {
        let period = Period::Month {
            month,
            year: Some(year),
        };
        document
            .transactions
            .iter()
            .filter(|txn| period.contains(txn.date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TransactionService;
    use crate::ledger::{EntryKind, NewTransaction, Responsible};

    fn dated(id: i64, y: i32, m: u32, kind: EntryKind, amount: f64, who: Responsible) -> Transaction {
        NewTransaction::new(kind, NaiveDate::from_ymd_opt(y, m, 10).unwrap(), amount, who)
            .into_transaction(id)
    }

    fn sample() -> FinancialDocument {
        let mut document = FinancialDocument::empty("A", "B");
        for txn in [
            dated(1, 2025, 1, EntryKind::Income, 1000.0, Responsible::User1),
            dated(2, 2024, 1, EntryKind::Expense, 200.0, Responsible::User2),
            dated(3, 2025, 2, EntryKind::Expense, 50.0, Responsible::Both),
        ] {
            TransactionService::apply_transaction(&mut document, txn);
        }
        document
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(Period::from_parts(13, None).is_err());
        assert_eq!(Period::from_parts(0, Some(2025)).unwrap(), Period::All);
    }

    #[test]
    fn flat_split_ignores_responsible() {
        let document = sample();
        let view = PeriodService::filter_by_period(
            &document,
            Period::Month {
                month: 1,
                year: None,
            },
        );
        assert_eq!(view.transactions.len(), 2);
        assert_eq!(view.users.user1.income, 500.0);
        assert_eq!(view.users.user2.income, 500.0);
        assert_eq!(view.users.user1.expenses, 100.0);
        assert_eq!(view.users.user2.expenses, 100.0);
        assert_eq!(view.users.user1.name, "A");
    }

    #[test]
    fn year_narrows_the_month() {
        let document = sample();
        let view = PeriodService::filter_by_period(
            &document,
            Period::Month {
                month: 1,
                year: Some(2024),
            },
        );
        assert_eq!(view.transactions.len(), 1);
        assert_eq!(view.transactions[0].id, 2);
        assert_eq!(view.total_income(), 0.0);
        assert_eq!(view.total_expenses(), 200.0);
    }

    #[test]
    fn transactions_by_month_requires_matching_year() {
        let document = sample();
        let ids: Vec<i64> = PeriodService::transactions_by_month(&document, 1, 2025)
            .into_iter()
            .map(|txn| txn.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn filtering_leaves_document_untouched() {
        let document = sample();
        let before = document.clone();
        let _ = PeriodService::filter_by_period(
            &document,
            Period::Month {
                month: 2,
                year: None,
            },
        );
        assert_eq!(document, before);
    }
}
