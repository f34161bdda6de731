//! Shell context, dispatch, and CLI error types.

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::household_manager::HouseholdManager,
    currency::{format_currency, format_date, LocaleConfig},
    errors::FinanceError,
    storage::JsonFileStore,
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported for a single command; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Finance(#[from] FinanceError),
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {usage}"))
    }
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) manager: HouseholdManager,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) locale: LocaleConfig,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let store = JsonFileStore::new_default()?;
        let manager = HouseholdManager::new(
            Box::new(store),
            config.user1_name.clone(),
            config.user2_name.clone(),
        );
        Self::with_parts(mode, manager, config, config_manager)
    }

    /// Builds a context from explicit parts. Fails when the stored document
    /// cannot be read, so a corrupt store stops the shell at startup.
    pub fn with_parts(
        mode: CliMode,
        manager: HouseholdManager,
        config: Config,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        manager.document()?;

        Ok(Self {
            mode,
            registry,
            locale: LocaleConfig::from_tag(&config.locale),
            manager,
            config,
            config_manager,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        "household> ".to_string()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.config.currency, &self.locale)
    }

    pub(crate) fn date(&self, date: chrono::NaiveDate) -> String {
        format_date(date, &self.locale)
    }

    pub(crate) fn apply_config(&mut self, config: Config) -> CommandResult {
        self.config_manager.save(&config)?;
        self.locale = LocaleConfig::from_tag(&config.locale);
        self.config = config;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                if self.mode() == CliMode::Interactive {
                    output::hint("Use `help <command>` for usage details.");
                }
            }
            CommandError::Finance(FinanceError::Validation(err)) => {
                output::error(format!("Invalid input: {err}"));
            }
            CommandError::Finance(other) => output::error(other),
        }
    }
}
