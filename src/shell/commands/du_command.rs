use super::command_trait::{require_args, Command, CommandEnv, CommandResult};
use super::context::CommandContext;
use super::format::format_size_auto;
use crate::shell::filesystem::{calc_directory_size, exists_dir, FsError};

/// DU command - total size of a directory tree
pub struct DuCommand;

impl Command for DuCommand {
    fn name(&self) -> &'static str {
        "du"
    }

    fn description(&self) -> &'static str {
        "Calculate directory size. Usage: du [foldername]"
    }

    fn usage(&self) -> &'static str {
        "du [foldername]"
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

        let total = calc_directory_size(&target);
        Ok(format!("{}: {} ({} bytes)\n", target.display(), format_size_auto(total), total))
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::commands::test_support::{canonical_tmp, run_script};
    use crate::shell::commands::CommandContext;
    use std::fs;

    #[test]
    fn test_du_truncates_to_whole_kilobytes() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir(root.join("data")).unwrap();
        fs::write(root.join("data").join("a"), vec![0u8; 600]).unwrap();
        fs::write(root.join("data").join("b"), vec![0u8; 500]).unwrap();
        let mut context = CommandContext::new(root.clone(), None);

        let output = run_script("du data", "", &mut context);

        assert_eq!(output, format!("{}: 1 KB (1100 bytes)\n", root.join("data").display()));
    }

    #[test]
    fn test_du_empty_and_invalid_targets() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir(root.join("empty")).unwrap();
        fs::write(root.join("file"), b"abc").unwrap();
        let mut context = CommandContext::new(root.clone(), None);

        assert_eq!(
            run_script("du empty", "", &mut context),
            format!("{}: 0 B (0 bytes)\n", root.join("empty").display())
        );
        assert!(run_script("du file", "", &mut context).starts_with("du: not a directory"));
        assert!(run_script("du ghost", "", &mut context).starts_with("du: no such file or directory"));
        assert_eq!(run_script("du", "", &mut context), "du: missing operand. Usage: du [foldername]\n");
    }
}
