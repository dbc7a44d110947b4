use std::io;

use super::command_trait::{CommandEnv, CommandError};
use super::context::CommandContext;
use super::registry::CommandRegistry;
use crate::shell::console::Console;
use crate::shell::parser::parse_command;

/// Handles command parsing and execution
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    /// Create a new command dispatcher with the given registry
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Execute a full command line, writing its output or diagnostic to the console.
    ///
    /// Command failures are reported and swallowed; only a broken console is an error.
    pub fn execute(&self, command_line: &str, context: &mut CommandContext, console: &mut dyn Console) -> io::Result<()> {
        let parsed = parse_command(command_line);
        if parsed.name.is_empty() {
            return Ok(());
        }

        let Some(command) = self.registry.find(&parsed.name) else {
            log::debug!("Unknown command: {}", parsed.name);
            return console.print(&format!("Unknown command: {}\n", parsed.name));
        };

        log::debug!("Executing {} with {:?}", parsed.name, parsed.args);
        let mut env = CommandEnv {
            registry: &self.registry,
            console: &mut *console,
        };
        let output = match command.execute(&parsed.args, context, &mut env) {
            Ok(output) => output,
            Err(CommandError::Console(err)) => return Err(err),
            Err(err) => {
                log::debug!("{} failed: {:?}", parsed.name, err);
                format!("{}: {}\n", parsed.name, err)
            }
        };

        if output.is_empty() {
            return Ok(());
        }
        console.print(&output)
    }
}
