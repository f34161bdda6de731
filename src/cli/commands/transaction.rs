use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::{LookupService, Period, PeriodService};
use crate::ledger::{Transaction, TransactionDraft};

use super::parse_period;

const ADD_USAGE: &str = "add type=<income|expense> date=<YYYY-MM-DD> amount=<value> \
responsible=<user1|user2|both> category=<name> payment=<method> description=<text> [notes=<text>]";
const REMOVE_USAGE: &str = "remove <id>";
const LIST_USAGE: &str = "list [month|all] [year]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "remove",
            "Delete a transaction and re-derive totals",
            REMOVE_USAGE,
            cmd_remove,
        ),
        CommandEntry::new("list", "List transactions for a period", LIST_USAGE, cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = parse_draft(args)?;
    let transaction = context.manager.add_transaction(&draft)?;
    let document = context.manager.document()?;
    let who = LookupService::responsible_name(
        &document,
        transaction.responsible.as_str(),
        &context.config.joint_label,
    );
    output::success(format!(
        "Transaction {} recorded: {} {} ({})",
        transaction.id,
        transaction.kind,
        context.money(transaction.amount),
        who
    ));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::usage(REMOVE_USAGE));
    };
    let id: i64 = raw.parse().map_err(|_| CommandError::usage(REMOVE_USAGE))?;
    let removed = context.manager.remove_transaction(id)?;
    output::success(format!(
        "Removed transaction {} ({}).",
        removed.id, removed.description
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = parse_period(args, LIST_USAGE)?;
    let document = context.manager.document()?;
    let view = PeriodService::filter_by_period(&document, period);
    if view.transactions.is_empty() {
        output::info("No transactions for this period.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = view
        .transactions
        .iter()
        .map(|txn| transaction_row(context, &document, txn))
        .collect();
    output::section(match period {
        Period::All => "Transactions".to_string(),
        Period::Month { month, year: None } => format!("Transactions for month {month}"),
        Period::Month {
            month,
            year: Some(year),
        } => format!("Transactions for {month:02}/{year}"),
    });
    output::table(
        &["ID", "Date", "Description", "Category", "Amount", "Responsible"],
        &rows,
    );
    Ok(())
}

pub(crate) fn transaction_row(
    context: &ShellContext,
    document: &crate::ledger::FinancialDocument,
    txn: &Transaction,
) -> Vec<String> {
    let sign = if txn.is_income() { "+" } else { "-" };
    vec![
        txn.id.to_string(),
        context.date(txn.date),
        txn.description.clone(),
        txn.category.clone(),
        format!("{sign} {}", context.money(txn.amount)),
        LookupService::responsible_name(
            document,
            txn.responsible.as_str(),
            &context.config.joint_label,
        ),
    ]
}

fn parse_draft(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    let mut draft = TransactionDraft::default();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| CommandError::usage(ADD_USAGE))?;
        let slot = match key.to_ascii_lowercase().as_str() {
            "type" => &mut draft.kind,
            "date" => &mut draft.date,
            "description" => &mut draft.description,
            "category" => &mut draft.category,
            "amount" => &mut draft.amount,
            "payment" => &mut draft.payment,
            "responsible" => &mut draft.responsible,
            "notes" => &mut draft.notes,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "Unknown field `{other}`. Usage: {ADD_USAGE}"
                )))
            }
        };
        *slot = value.to_string();
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_fields_map_from_key_value_pairs() {
        let draft = parse_draft(&["type=income", "amount=10", "Description=Gift"]).unwrap();
        assert_eq!(draft.kind, "income");
        assert_eq!(draft.amount, "10");
        assert_eq!(draft.description, "Gift");
        assert!(draft.date.is_empty());
    }

    #[test]
    fn unknown_keys_and_bare_words_are_rejected() {
        assert!(parse_draft(&["colour=red"]).is_err());
        assert!(parse_draft(&["income"]).is_err());
    }
}
