use super::command_trait::{require_args, Command, CommandEnv, CommandResult};
use super::context::CommandContext;
use super::format::type_label;
use crate::shell::filesystem::search_recursive;

/// SEARCH command - find entries below the current directory by name
pub struct SearchCommand;

impl Command for SearchCommand {
    fn name(&self) -> &'static str {
        "search"
    }

    fn description(&self) -> &'static str {
        "Search files/folders by keyword in current directory (recursive)."
    }

    fn usage(&self) -> &'static str {
        "search [keyword]"
    }

    fn execute(&self, args: &[String], context: &mut CommandContext, _env: &mut CommandEnv<'_>) -> CommandResult {
        let args = require_args(self, args, 1)?;
        let keyword = &args[0];

        let matches = search_recursive(&context.cwd, keyword);
        if matches.is_empty() {
            return Ok(format!("No matches found for '{}'.\n", keyword));
        }

        let mut result = String::new();
        for entry in &matches {
            result.push_str(&format!("{:<6}{}\n", type_label(entry), entry.path.display()));
        }
        result.push_str(&format!("{} match(es) found.\n", matches.len()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::commands::test_support::{canonical_tmp, run_script};
    use crate::shell::commands::CommandContext;
    use std::fs;

    #[test]
    fn test_search_case_insensitive_recursive() {
        let (_tmp, root) = canonical_tmp();
        fs::write(root.join("foo.txt"), b"").unwrap();
        fs::create_dir(root.join("FOOBAR")).unwrap();
        fs::write(root.join("FOOBAR").join("myFooStuff"), b"").unwrap();
        fs::write(root.join("bar.txt"), b"").unwrap();
        let mut context = CommandContext::new(root.clone(), None);

        let output = run_script("search Foo", "", &mut context);

        assert!(output.contains(&format!("File  {}\n", root.join("foo.txt").display())));
        assert!(output.contains(&format!("Dir   {}\n", root.join("FOOBAR").display())));
        assert!(output.contains(&root.join("FOOBAR").join("myFooStuff").display().to_string()));
        assert!(!output.contains("bar.txt"));
        assert!(output.ends_with("3 match(es) found.\n"));
    }

    #[test]
    fn test_search_no_matches() {
        let (_tmp, root) = canonical_tmp();
        fs::write(root.join("a.txt"), b"").unwrap();
        let mut context = CommandContext::new(root, None);

        assert_eq!(run_script("search zzz", "", &mut context), "No matches found for 'zzz'.\n");
        assert_eq!(
            run_script("search", "", &mut context),
            "search: missing operand. Usage: search [keyword]\n"
        );
    }
}
