//! Shell context, command errors and dispatch for the terminal front-end.

use std::{env, io};

use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::ExpenseFormController,
    domain::FormVariant,
    errors::{FormError, ValidationError},
    storage::JsonPreferences,
};

use super::commands;
use super::io as cli_io;
use super::registry::CommandRegistry;

pub(crate) const SCRIPT_ENV: &str = "EXPENSE_FORM_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Fatal shell failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FormError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Failures of a single command; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Cannot submit: {0}")]
    Rejected(#[from] ValidationError),
    #[error(transparent)]
    Core(#[from] FormError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub struct ShellContext {
    mode: CliMode,
    config_manager: ConfigManager,
    config: Config,
    controller: ExpenseFormController,
    registry: CommandRegistry,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let controller = Self::build_controller(&config_manager, &config)?;
        Ok(Self {
            mode,
            config_manager,
            config,
            controller,
            registry: CommandRegistry::with_entries(commands::all_definitions()),
            running: true,
        })
    }

    fn build_controller(
        manager: &ConfigManager,
        config: &Config,
    ) -> Result<ExpenseFormController, FormError> {
        let store = JsonPreferences::new(
            Some(manager.base_dir().to_path_buf()),
            &config.preferences_file,
        )?;
        let mut controller = ExpenseFormController::new(config.variant, Box::new(store));
        controller.activate();
        Ok(controller)
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn controller(&self) -> &ExpenseFormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ExpenseFormController {
        &mut self.controller
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Persists the new variant and re-activates the screen with it.
    pub(crate) fn switch_variant(&mut self, variant: FormVariant) -> Result<(), CommandError> {
        self.config.variant = variant;
        self.config_manager.save(&self.config)?;
        self.controller = Self::build_controller(&self.config_manager, &self.config)?;
        Ok(())
    }

    pub(crate) fn prompt(&self) -> String {
        if self.controller.is_managing() {
            "expenses/categories> ".into()
        } else {
            "expenses> ".into()
        }
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

    fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(prompt, false)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
impl ShellContext {
    pub(crate) fn for_tests(controller: ExpenseFormController, base: std::path::PathBuf) -> Self {
        let config_manager = ConfigManager::with_base_dir(base).expect("config manager");
        Self {
            mode: CliMode::Script,
            config_manager,
            config: Config::default(),
            controller,
            registry: CommandRegistry::with_entries(commands::all_definitions()),
            running: true,
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }
}
