/// A command line split into its name and positional arguments
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split on whitespace. There is no quoting or escaping.
pub fn parse_command(line: &str) -> ParsedCommand {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let name = tokens.next().unwrap_or_default();
    ParsedCommand {
        name,
        args: tokens.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_splits_name_and_args() {
        let parsed = parse_command("  cp   a.txt\tb.txt ");
        assert_eq!(parsed.name, "cp");
        assert_eq!(parsed.args, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_parse_command_blank_line() {
        assert_eq!(parse_command("   "), ParsedCommand::default());
    }

    #[test]
    fn test_parse_command_no_quoting() {
        let parsed = parse_command("touch \"my file\"");
        assert_eq!(parsed.args, vec!["\"my", "file\""]);
    }
}
