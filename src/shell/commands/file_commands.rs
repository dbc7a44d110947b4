use super::command_trait::{require_args, Command, CommandEnv, CommandError, CommandResult};
use super::context::CommandContext;
use crate::shell::filesystem::{
    create_directory, create_file, exists_dir, exists_file, remove_empty_dir, remove_file, FsError,
};

/// TOUCH command - create an empty file
pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create an empty file. Usage: touch [filename]"
    }

    fn usage(&self) -> &'static str {
        "touch [filename]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let target = context.resolve(&args[0]);

        if target.exists() {
            return Err(FsError::AlreadyExists(target).into());
        }
        create_file(&target)?;
        Ok(format!("Created file: {}\n", target.display()))
    }
}

/// MKDIR command - create a single directory
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create a new directory. Usage: mkdir [foldername]"
    }

    fn usage(&self) -> &'static str {
        "mkdir [foldername]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let target = context.resolve(&args[0]);

        if target.exists() {
            return Err(FsError::AlreadyExists(target).into());
        }
        create_directory(&target)?;
        Ok(format!("Created directory: {}\n", target.display()))
    }
}

/// RM command - delete a file after confirmation
pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn description(&self) -> &'static str {
        "Delete a file. Usage: rm [filename]"
    }

    fn usage(&self) -> &'static str {
        "rm [filename]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let target = context.resolve(&args[0]);

        if !target.exists() {
            return Err(FsError::NotFound(target).into());
        }
        if !exists_file(&target) {
            return Err(FsError::NotAFile(target).into());
        }

        if !env.confirm(&format!("Delete file '{}'?", target.display()))? {
            return Ok("Delete cancelled.\n".to_string());
        }
        remove_file(&target)?;
        Ok(format!("Deleted file: {}\n", target.display()))
    }
}

/// RMDIR command - delete an empty directory
pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn description(&self) -> &'static str {
        "Delete an empty directory. Usage: rmdir [foldername]"
    }

    fn usage(&self) -> &'static str {
        "rmdir [foldername]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let target = context.resolve(&args[0]);

        if !target.exists() {
            return Err(FsError::NotFound(target).into());
        }
        if !exists_dir(&target) {
            return Err(FsError::NotADirectory(target).into());
        }
        if context.cwd.starts_with(&target) {
            return Err(CommandError::ExecutionError(format!(
                "cannot remove the current directory or one of its parents: {}",
                target.display()
            )));
        }
        if !remove_empty_dir(&target)? {
            return Err(FsError::NotEmpty(target).into());
        }
        Ok(format!("Deleted directory: {}\n", target.display()))
    }
}
