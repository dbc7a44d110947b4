use std::io;

use thiserror::Error;

use super::context::CommandContext;
use super::registry::CommandRegistry;
use crate::shell::console::Console;
use crate::shell::filesystem::FsError;

/// Result type for command execution; `Ok` holds the text to print
pub type CommandResult = Result<String, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// Too few arguments
    #[error("missing operand. Usage: {0}")]
    Usage(&'static str),
    /// Filesystem operation failed
    #[error(transparent)]
    Filesystem(#[from] FsError),
    /// Reading the confirmation answer failed
    #[error("console error: {0}")]
    Console(#[from] io::Error),
    /// Generic execution error
    #[error("{0}")]
    ExecutionError(String),
}

/// What a command can reach besides the session state
pub struct CommandEnv<'a> {
    /// Every registered command, for introspection such as `help`
    pub registry: &'a CommandRegistry,
    /// Stream used for confirmation prompts
    pub console: &'a mut dyn Console,
}

impl CommandEnv<'_> {
    pub fn confirm(&mut self, question: &str) -> Result<bool, CommandError> {
        Ok(self.console.confirm(question)?)
    }
}

/// Trait that all explorer commands implement
pub trait Command {
    /// The name typed to run the command (e.g. "ls", "cp")
    fn name(&self) -> &'static str;

    /// One line shown by `help`
    fn description(&self) -> &'static str;

    /// Synopsis shown when arguments are missing
    fn usage(&self) -> &'static str {
        self.name()
    }

    /// Execute the command with the given arguments
    fn execute(&self, args: &[String], context: &mut CommandContext, env: &mut CommandEnv<'_>) -> CommandResult;
}

/// Check that at least `count` arguments were given
pub fn require_args<'a>(command: &dyn Command, args: &'a [String], count: usize) -> Result<&'a [String], CommandError> {
    if args.len() < count {
        return Err(CommandError::Usage(command.usage()));
    }
    Ok(args)
}
