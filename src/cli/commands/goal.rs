use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::parse_amount;
use crate::errors::FinanceError;

const GOAL_USAGE: &str = "goal <id> <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "goal",
            "Contribute to a savings goal (capped at its target)",
            GOAL_USAGE,
            cmd_goal,
        ),
        CommandEntry::new("goals", "List savings goals", "goals", cmd_goals),
    ]
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id, raw_amount] = args else {
        return Err(CommandError::usage(GOAL_USAGE));
    };
    let goal_id: u64 = raw_id
        .parse()
        .map_err(|_| CommandError::usage(GOAL_USAGE))?;
    let amount = parse_amount(raw_amount).map_err(FinanceError::from)?;
    let goal = context.manager.contribute_to_goal(goal_id, amount)?;
    output::success(format!(
        "Goal `{}` now at {} of {}.",
        goal.name,
        context.money(goal.current),
        context.money(goal.target)
    ));
    Ok(())
}

fn cmd_goals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let document = context.manager.document()?;
    if document.goals.is_empty() {
        output::info("No goals defined.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = document
        .goals
        .iter()
        .map(|goal| {
            vec![
                goal.id.to_string(),
                goal.name.clone(),
                context.money(goal.current),
                context.money(goal.target),
                goal.progress_percent()
                    .map(|progress| format!("{progress:.1}%"))
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    output::section("Goals");
    output::table(&["ID", "Name", "Saved", "Target", "Progress"], &rows);
    Ok(())
}
