use std::path::Path;

use super::command_trait::{require_args, Command, CommandEnv, CommandError, CommandResult};
use super::context::CommandContext;
use crate::shell::filesystem::{
    check_move, copy_file, effective_target, exists_file, move_path, FsError,
};

/// Ask before clobbering an existing target. Returns the overwrite flag to
/// use, or `None` when the user declined.
fn confirm_overwrite(src: &Path, dst: &Path, env: &mut CommandEnv<'_>) -> Result<Option<bool>, CommandError> {
    let target = effective_target(src, dst);
    if !target.exists() {
        return Ok(Some(false));
    }
    let question = format!("Target '{}' already exists. Overwrite?", target.display());
    if env.confirm(&question)? {
        Ok(Some(true))
    } else {
        Ok(None)
    }
}

/// CP command - copy a file
pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn description(&self) -> &'static str {
        "Copy file. Usage: cp [source] [target]"
    }

    fn usage(&self) -> &'static str {
        "cp [source] [target]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 2)?;
        let src = context.resolve(&args[0]);
        let dst = context.resolve(&args[1]);

        if !src.exists() {
            return Err(FsError::NotFound(src).into());
        }
        if !exists_file(&src) {
            return Err(FsError::NotAFile(src).into());
        }

        let Some(overwrite) = confirm_overwrite(&src, &dst, env)? else {
            return Ok("Copy cancelled.\n".to_string());
        };
        let target = copy_file(&src, &dst, overwrite)?;
        Ok(format!("Copied {} -> {}\n", src.display(), target.display()))
    }
}

/// MV command - move or rename a file or directory
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn description(&self) -> &'static str {
        "Move/rename file or folder. Usage: mv [source] [target]"
    }

    fn usage(&self) -> &'static str {
        "mv [source] [target]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 2)?;
        let src = context.resolve(&args[0]);
        let dst = context.resolve(&args[1]);

        if !src.exists() {
            return Err(FsError::NotFound(src).into());
        }
        check_move(&src, &effective_target(&src, &dst))?;

        let Some(overwrite) = confirm_overwrite(&src, &dst, env)? else {
            return Ok("Move cancelled.\n".to_string());
        };
        let target = move_path(&src, &dst, overwrite)?;
        Ok(format!("Moved {} -> {}\n", src.display(), target.display()))
    }
}
