use super::command_trait::{Command, CommandEnv, CommandError, CommandResult};
use super::context::CommandContext;
use crate::shell::filesystem::{exists_dir, FsError};

/// HELP command - list every registered command
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands."
    }

    fn execute(&self, _args: &[String], _context: &mut CommandContext, env: &mut CommandEnv<'_>) -> CommandResult {
        let mut result = String::from("Available commands:\n");
        for command in env.registry.all() {
            result.push_str(&format!("  {} - {}\n", command.name(), command.description()));
        }
        Ok(result)
    }
}

/// EXIT command - stop the session
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit MiniFileExplorer."
    }

    fn execute(&self, _args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        context.running = false;
        Ok("MiniFileExplorer closed successfully\n".to_string())
    }
}

/// CD command - change directory (stateful)
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change current directory. Usage: cd [path]"
    }

    fn usage(&self) -> &'static str {
        "cd [path]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let target = match args.first() {
            Some(path) => context.resolve(path),
            None => context
                .home()
                .map(|home| home.to_path_buf())
                .ok_or_else(|| CommandError::ExecutionError("home directory is not set".to_string()))?,
        };

        if !target.exists() {
            return Err(FsError::NotFound(target).into());
        }
        if !exists_dir(&target) {
            return Err(FsError::NotADirectory(target).into());
        }

        context.set_cwd(target);
        Ok(String::new())
    }
}
