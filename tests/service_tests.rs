mod common;

use common::{date, entry};
use household_core::{
    ledger::{EntryKind, FinancialDocument, Responsible},
    GoalService, Period, PeriodService, TransactionService,
};

fn empty() -> FinancialDocument {
    FinancialDocument::empty("Lucas", "Cecília")
}

#[test]
fn totals_are_preserved_across_mixed_responsibility() {
    let mut document = empty();
    let entries = [
        (EntryKind::Income, 1000.0, Responsible::Both),
        (EntryKind::Income, 333.33, Responsible::User1),
        (EntryKind::Expense, 75.5, Responsible::Both),
        (EntryKind::Income, 12.25, Responsible::User2),
        (EntryKind::Expense, 19.99, Responsible::User1),
        (EntryKind::Expense, 0.01, Responsible::Both),
    ];
    for (index, (kind, amount, who)) in entries.iter().enumerate() {
        TransactionService::add(
            &mut document,
            entry(*kind, date(2025, 1, 1), *amount, *who),
            1_000 + index as i64,
        );
    }

    let income: f64 = entries
        .iter()
        .filter(|(kind, _, _)| *kind == EntryKind::Income)
        .map(|(_, amount, _)| amount)
        .sum();
    let expenses: f64 = entries
        .iter()
        .filter(|(kind, _, _)| *kind == EntryKind::Expense)
        .map(|(_, amount, _)| amount)
        .sum();

    assert!((document.users.total_income() - income).abs() < 1e-9);
    assert!((document.users.total_expenses() - expenses).abs() < 1e-9);
    assert_eq!(document.transactions.len(), entries.len());
}

#[test]
fn shared_entry_matches_two_half_entries() {
    let mut shared = empty();
    TransactionService::add(
        &mut shared,
        entry(EntryKind::Income, date(2025, 2, 1), 250.0, Responsible::Both),
        1,
    );

    let mut halves = empty();
    TransactionService::add(
        &mut halves,
        entry(EntryKind::Income, date(2025, 2, 1), 125.0, Responsible::User1),
        1,
    );
    TransactionService::add(
        &mut halves,
        entry(EntryKind::Income, date(2025, 2, 1), 125.0, Responsible::User2),
        2,
    );

    assert_eq!(shared.users, halves.users);
}

#[test]
fn joint_income_of_one_thousand_gives_five_hundred_each() {
    let mut document = empty();
    TransactionService::add(
        &mut document,
        entry(EntryKind::Income, date(2025, 3, 10), 1000.0, Responsible::Both),
        42,
    );
    assert_eq!(document.users.user1.income, 500.0);
    assert_eq!(document.users.user2.income, 500.0);
    assert_eq!(document.transactions.len(), 1);
}

#[test]
fn removing_a_transaction_restores_prior_totals() {
    let mut document = empty();
    TransactionService::add(
        &mut document,
        entry(EntryKind::Expense, date(2025, 1, 5), 80.0, Responsible::User2),
        1,
    );
    let before = document.users.clone();
    let id = TransactionService::add(
        &mut document,
        entry(EntryKind::Expense, date(2025, 1, 6), 40.0, Responsible::Both),
        2,
    );
    TransactionService::remove_transaction(&mut document, id).unwrap();
    assert_eq!(document.users, before);
}

#[test]
fn all_period_returns_document_unchanged() {
    let mut document = empty();
    for (id, month) in [(1, 3), (2, 1), (3, 2)] {
        TransactionService::add(
            &mut document,
            entry(EntryKind::Income, date(2025, month, 1), 10.0, Responsible::User1),
            id,
        );
    }
    let view = PeriodService::filter_by_period(&document, Period::All);
    assert_eq!(view.transactions, document.transactions);
    assert_eq!(view.users, document.users);
}

#[test]
fn month_filter_selects_only_that_month() {
    let mut document = empty();
    for (id, month) in [(1, 1), (2, 1), (3, 2), (4, 3)] {
        TransactionService::add(
            &mut document,
            entry(EntryKind::Expense, date(2025, month, 15), 30.0, Responsible::User1),
            id,
        );
    }
    let period = Period::from_parts(1, None).unwrap();
    let view = PeriodService::filter_by_period(&document, period);
    let ids: Vec<i64> = view.transactions.iter().map(|txn| txn.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(view.users.user1.expenses, 30.0);
    assert_eq!(view.users.user2.expenses, 30.0);
}

#[test]
fn overshooting_contribution_lands_exactly_on_target() {
    let mut document = FinancialDocument::bootstrap("Lucas", "Cecília");
    let goal = document.goals[0].clone();
    let excess = 123.45;
    let amount = goal.target - goal.current + excess;
    let updated = GoalService::contribute_to_goal(&mut document, goal.id, amount).unwrap();
    assert_eq!(updated.current, goal.target);

    let again = GoalService::contribute_to_goal(&mut document, goal.id, 10.0).unwrap();
    assert_eq!(again.current, goal.target);
}
