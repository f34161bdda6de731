use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::Config;
use crate::errors::FinanceError;

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for key in Config::KEYS {
                output::info(format!(
                    "  {:<12} {}",
                    key,
                    context.config.get(key).unwrap_or_default()
                ));
            }
            output::info(format!("  file         {}", context.config_manager.path().display()));
            Ok(())
        }
        ["set", key, value] => {
            let mut updated = context.config.clone();
            updated.set(key, value).map_err(FinanceError::from)?;
            context.apply_config(updated)?;
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}
