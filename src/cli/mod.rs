//! Line-oriented shell over the household manager.

pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
