use crate::ledger::{FinancialDocument, Transaction};

const RECENT_LIMIT: usize = 5;

/// Headline figures for the dashboard cards and charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings: Option<f64>,
    pub savings_progress: Option<f64>,
    pub recent: Vec<Transaction>,
    pub category_spending: Vec<CategorySpending>,
    pub goal_progress: Vec<GoalProgress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub name: String,
    pub current: f64,
    pub remaining: f64,
    pub target: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(document: &FinancialDocument) -> DashboardSummary {
        let total_income = document.users.total_income();
        let total_expenses = document.users.total_expenses();
        let first_goal = document.goals.first().filter(|goal| goal.target > 0.0);

        DashboardSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            savings: first_goal.map(|goal| goal.current),
            savings_progress: first_goal.and_then(|goal| goal.progress_percent()),
            recent: Self::recent_transactions(document, RECENT_LIMIT),
            category_spending: Self::category_spending(document),
            goal_progress: Self::goal_progress(document),
        }
    }

    /// Newest first by date; among equal dates the later entry wins.
    pub fn recent_transactions(document: &FinancialDocument, limit: usize) -> Vec<Transaction> {
        let mut ordered: Vec<&Transaction> = document.transactions.iter().rev().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered.into_iter().take(limit).cloned().collect()
    }

    /// Expense totals per category name, in first-appearance order.
    pub fn category_spending(document: &FinancialDocument) -> Vec<CategorySpending> {
        let mut totals: Vec<CategorySpending> = Vec::new();
        for txn in document.transactions.iter().filter(|txn| txn.is_expense()) {
            match totals.iter_mut().find(|entry| entry.category == txn.category) {
                Some(entry) => entry.total += txn.amount,
                None => totals.push(CategorySpending {
                    category: txn.category.clone(),
                    total: txn.amount,
                }),
            }
        }
        totals
    }

    pub fn goal_progress(document: &FinancialDocument) -> Vec<GoalProgress> {
        document
            .goals
            .iter()
            .map(|goal| GoalProgress {
                name: goal.name.clone(),
                current: goal.current,
                remaining: goal.remaining(),
                target: goal.target,
            })
            .collect()
    }
}
