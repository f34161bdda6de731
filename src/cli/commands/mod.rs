mod category;
mod config;
mod goal;
mod report;
mod system;
mod transaction;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::core::services::Period;
use crate::errors::FinanceError;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in transaction::definitions()
        .into_iter()
        .chain(report::definitions())
        .chain(goal::definitions())
        .chain(category::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Reads `[month] [year]` arguments; a missing month or `all` means no filter.
pub(crate) fn parse_period(args: &[&str], usage: &str) -> Result<Period, CommandError> {
    if args.len() > 2 {
        return Err(CommandError::usage(usage));
    }
    let month = match args.first() {
        None => 0,
        Some(raw) if raw.eq_ignore_ascii_case("all") => 0,
        Some(raw) => raw.parse::<u32>().map_err(|_| CommandError::usage(usage))?,
    };
    let year = match args.get(1) {
        None => None,
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| CommandError::usage(usage))?),
    };
    Period::from_parts(month, year).map_err(|err| FinanceError::from(err).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_arguments() {
        assert_eq!(parse_period(&[], "u").unwrap(), Period::All);
        assert_eq!(parse_period(&["all"], "u").unwrap(), Period::All);
        assert_eq!(
            parse_period(&["3", "2025"], "u").unwrap(),
            Period::Month {
                month: 3,
                year: Some(2025)
            }
        );
        assert!(matches!(
            parse_period(&["march"], "u"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            parse_period(&["13"], "u"),
            Err(CommandError::Finance(FinanceError::Validation(_)))
        ));
    }
}
