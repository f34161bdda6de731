use serde::{Deserialize, Serialize};

use super::transaction::{EntryKind, Responsible};

/// Display name plus the running totals attributed to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTotals {
    pub name: String,
    pub income: f64,
    pub expenses: f64,
}

impl UserTotals {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            income: 0.0,
            expenses: 0.0,
        }
    }

    pub fn add(&mut self, kind: EntryKind, amount: f64) {
        match kind {
            EntryKind::Income => self.income += amount,
            EntryKind::Expense => self.expenses += amount,
        }
    }

    pub fn reset(&mut self) {
        self.income = 0.0;
        self.expenses = 0.0;
    }
}

/// The two members of the household, keyed `user1` and `user2` on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Users {
    pub user1: UserTotals,
    pub user2: UserTotals,
}

impl Users {
    pub fn new(user1: impl Into<String>, user2: impl Into<String>) -> Self {
        Self {
            user1: UserTotals::new(user1),
            user2: UserTotals::new(user2),
        }
    }

    pub fn total_income(&self) -> f64 {
        self.user1.income + self.user2.income
    }

    pub fn total_expenses(&self) -> f64 {
        self.user1.expenses + self.user2.expenses
    }

    /// Returns the single user for `user1`/`user2`, `None` for `both`.
    pub fn get(&self, responsible: Responsible) -> Option<&UserTotals> {
        match responsible {
            Responsible::User1 => Some(&self.user1),
            Responsible::User2 => Some(&self.user2),
            Responsible::Both => None,
        }
    }
}
