use super::command_trait::{require_args, Command, CommandEnv, CommandResult};
use super::context::CommandContext;
use super::format::{format_timestamp, type_label};
use crate::shell::filesystem::{file_info, FsError};

/// STAT command - show details of one file or directory
pub struct StatCommand;

impl Command for StatCommand {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn description(&self) -> &'static str {
        "Show file/directory info. Usage: stat [name]"
    }

    fn usage(&self) -> &'static str {
        "stat [name]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let target = context.resolve(&args[0]);

        if !target.exists() {
            return Err(FsError::NotFound(target).into());
        }

        let info = file_info(&target, true);
        Ok(format!(
            "Name: {}\nPath: {}\nType: {}\nSize: {} bytes\nModified: {}\nAccessed: {}\nCreated: {}\n",
            info.name,
            info.path.display(),
            type_label(&info),
            info.size,
            format_timestamp(info.modify_time),
            format_timestamp(info.access_time),
            format_timestamp(info.creation_time),
        ))
    }
}
