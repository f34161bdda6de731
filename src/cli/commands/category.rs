use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::LookupService;
use crate::ledger::Category;

const CATEGORIES_USAGE: &str = "categories [income|expense]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "categories",
        "List categories, optionally by type",
        CATEGORIES_USAGE,
        cmd_categories,
    )]
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let document = context.manager.document()?;
    let categories: Vec<&Category> = match args {
        [] => document.categories.iter().collect(),
        [kind] => LookupService::categories_by_type_name(&document, kind),
        _ => return Err(CommandError::usage(CATEGORIES_USAGE)),
    };
    if categories.is_empty() {
        output::info("No matching categories.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|category| {
            vec![
                category.id.to_string(),
                category.name.clone(),
                category.kind.to_string(),
                category.subcategories.join(", "),
            ]
        })
        .collect();
    output::section("Categories");
    output::table(&["ID", "Name", "Type", "Subcategories"], &rows);
    Ok(())
}
