use super::command_trait::{Command, CommandEnv, CommandResult};
use super::context::CommandContext;
use super::format::{render_table, sort_by_size, sort_by_time};
use crate::shell::filesystem::{calc_directory_size, list_directory};

/// LS command - list the current directory
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents. Usage: ls [-s|-t]"
    }

    fn usage(&self) -> &'static str {
        "ls [-s|-t]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let sort_size = args.iter().any(|arg| arg == "-s");
        let sort_time = args.iter().any(|arg| arg == "-t");

        let mut entries = list_directory(&context.cwd);
        if entries.is_empty() {
            return Ok("(empty directory)\n".to_string());
        }

        // -s wins when both flags are given
        if sort_size {
            for entry in entries.iter_mut().filter(|entry| entry.is_directory) {
                entry.size = calc_directory_size(&entry.path);
            }
            sort_by_size(&mut entries);
        } else if sort_time {
            sort_by_time(&mut entries);
        }

        Ok(render_table(&entries, sort_size))
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::commands::test_support::{canonical_tmp, run_script};
    use crate::shell::commands::CommandContext;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};

    fn names_in_order(output: &str) -> Vec<String> {
        output
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_ls_empty_directory() {
        let (_tmp, root) = canonical_tmp();
        let mut context = CommandContext::new(root, None);

        assert_eq!(run_script("ls", "", &mut context), "(empty directory)\n");
    }

    #[test]
    fn test_ls_missing_directory_reads_as_empty() {
        let (_tmp, root) = canonical_tmp();
        let mut context = CommandContext::new(root.join("vanished"), None);

        assert_eq!(run_script("ls", "", &mut context), "(empty directory)\n");
    }

    #[test]
    fn test_ls_size_sort_puts_zero_sizes_last() {
        let (_tmp, root) = canonical_tmp();
        fs::write(root.join("five"), vec![0u8; 5]).unwrap();
        fs::write(root.join("zero_file"), b"").unwrap();
        fs::create_dir(root.join("zero_dir")).unwrap();
        fs::create_dir(root.join("three_dir")).unwrap();
        fs::write(root.join("three_dir").join("inner"), vec![0u8; 3]).unwrap();
        let mut context = CommandContext::new(root, None);

        let output = run_script("ls -s", "", &mut context);
        let names = names_in_order(&output);

        assert_eq!(&names[..2], &["five".to_string(), "three_dir/".to_string()]);
        let mut tail = names[2..].to_vec();
        tail.sort();
        assert_eq!(tail, vec!["zero_dir/".to_string(), "zero_file".to_string()]);
        // aggregated directory size is shown
        assert!(output.lines().any(|line| line.starts_with("three_dir/") && line.contains(" 3 ")));
    }

    #[test]
    fn test_ls_time_sort_newest_first() {
        let (_tmp, root) = canonical_tmp();
        let now = SystemTime::now();
        for (name, age) in [("older", 300), ("newest", 0), ("middle", 100)] {
            let file = File::create(root.join(name)).unwrap();
            file.set_modified(now - Duration::from_secs(age)).unwrap();
        }
        let mut context = CommandContext::new(root, None);

        let output = run_script("ls -t", "", &mut context);
        assert_eq!(names_in_order(&output), vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_ls_size_flag_takes_precedence() {
        let (_tmp, root) = canonical_tmp();
        let now = SystemTime::now();
        let small = File::create(root.join("small_new")).unwrap();
        small.set_len(1).unwrap();
        small.set_modified(now).unwrap();
        let big = File::create(root.join("big_old")).unwrap();
        big.set_len(100).unwrap();
        big.set_modified(now - Duration::from_secs(1000)).unwrap();
        let mut context = CommandContext::new(root, None);

        let output = run_script("ls -t -s", "", &mut context);
        assert_eq!(names_in_order(&output), vec!["big_old", "small_new"]);
    }

    #[test]
    fn test_ls_plain_marks_directories() {
        let (_tmp, root) = canonical_tmp();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("x"), b"abc").unwrap();
        let mut context = CommandContext::new(root, None);

        let output = run_script("ls", "", &mut context);
        let row = output.lines().nth(1).unwrap();
        assert_eq!(row.split_whitespace().take(3).collect::<Vec<_>>(), vec!["sub/", "Dir", "-"]);
    }
}
