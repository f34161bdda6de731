use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::{PeriodService, SummaryService};

use super::parse_period;
use super::transaction::transaction_row;

const MONTH_USAGE: &str = "month <0-12|all> [year]";
const SUMMARY_USAGE: &str = "summary [month|all] [year]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "month",
            "Show per-user totals for a month (0 = all)",
            MONTH_USAGE,
            cmd_month,
        ),
        CommandEntry::new(
            "summary",
            "Dashboard cards, recent activity, and goals",
            SUMMARY_USAGE,
            cmd_summary,
        ),
        CommandEntry::new("debts", "List tracked debts", "debts", cmd_debts),
    ]
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(args, MONTH_USAGE)?;
    let view = context.manager.filter_by_period(period)?;
    output::section(format!("Totals ({} transactions)", view.transactions.len()));
    let rows: Vec<Vec<String>> = [&view.users.user1, &view.users.user2]
        .into_iter()
        .map(|user| {
            vec![
                user.name.clone(),
                context.money(user.income),
                context.money(user.expenses),
            ]
        })
        .collect();
    output::table(&["User", "Income", "Expenses"], &rows);
    output::info(format!(
        "Income {} | Expenses {} | Balance {}",
        context.money(view.total_income()),
        context.money(view.total_expenses()),
        context.money(view.balance())
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(args, SUMMARY_USAGE)?;
    let document = context.manager.document()?;
    let view = PeriodService::filter_by_period(&document, period);
    let summary = SummaryService::dashboard(&view.to_document(&document));

    output::section("Summary");
    output::info(format!("Income   : {}", context.money(summary.total_income)));
    output::info(format!("Expenses : {}", context.money(summary.total_expenses)));
    output::info(format!("Balance  : {}", context.money(summary.balance)));
    if let (Some(savings), Some(progress)) = (summary.savings, summary.savings_progress) {
        output::info(format!(
            "Savings  : {} ({:.1}%)",
            context.money(savings),
            progress
        ));
    }

    if !summary.recent.is_empty() {
        output::section("Recent transactions");
        let rows: Vec<Vec<String>> = summary
            .recent
            .iter()
            .map(|txn| transaction_row(context, &document, txn))
            .collect();
        output::table(
            &["ID", "Date", "Description", "Category", "Amount", "Responsible"],
            &rows,
        );
    }

    if !summary.category_spending.is_empty() {
        output::section("Spending by category");
        let rows: Vec<Vec<String>> = summary
            .category_spending
            .iter()
            .map(|entry| vec![entry.category.clone(), context.money(entry.total)])
            .collect();
        output::table(&["Category", "Spent"], &rows);
    }

    if !summary.goal_progress.is_empty() {
        output::section("Goals");
        let rows: Vec<Vec<String>> = summary
            .goal_progress
            .iter()
            .map(|goal| {
                vec![
                    goal.name.clone(),
                    context.money(goal.current),
                    context.money(goal.remaining),
                    context.money(goal.target),
                ]
            })
            .collect();
        output::table(&["Goal", "Saved", "Remaining", "Target"], &rows);
    }
    Ok(())
}

fn cmd_debts(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let document = context.manager.document()?;
    if document.debts.is_empty() {
        output::info("No debts recorded.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = document
        .debts
        .iter()
        .map(|debt| {
            vec![
                debt.id.to_string(),
                debt.name.clone(),
                context.money(debt.total),
                context.money(debt.paid),
                context.money(debt.remaining),
                format!("{}%", debt.interest),
                debt.due_date.clone(),
            ]
        })
        .collect();
    output::section("Debts");
    output::table(
        &["ID", "Name", "Total", "Paid", "Remaining", "Interest", "Due"],
        &rows,
    );
    Ok(())
}
