use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "A minimal interactive file explorer", long_about = "A minimal interactive file explorer. Reads commands such as cd, ls, cp and mv from standard input and applies them to the local filesystem relative to a tracked current directory. Type 'help' at the prompt for the full command list.")]
pub struct App {
    /// Directory to start in. Defaults to the current working directory
    #[arg(value_name = "START_DIR")]
    pub start_dir: Option<PathBuf>,

    /// Config file to use instead of the per-user default
    #[arg(short = 'c', long = "config", env = "MINI_EXPLORER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace). Logs go to stderr
    #[arg(short = 'l', long = "log-level", default_value = "warn", env = "MINI_EXPLORER_LOG_LEVEL")]
    pub log_level: log::LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition_is_valid() {
        App::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_start_dir_and_options() {
        let app = App::try_parse_from(["mini-file-explorer", "/tmp", "--config", "x.toml", "-l", "debug"]).unwrap();

        assert_eq!(app.start_dir, Some(PathBuf::from("/tmp")));
        assert_eq!(app.config, Some(PathBuf::from("x.toml")));
        assert_eq!(app.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        assert!(App::try_parse_from(["mini-file-explorer", "--log-level", "loud"]).is_err());
    }
}
