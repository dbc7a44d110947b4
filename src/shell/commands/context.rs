use std::path::{Path, PathBuf};

use crate::shell::filesystem::normalize;

/// Mutable session state threaded through every command
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// Current working directory, always canonical
    pub cwd: PathBuf,
    /// Home directory used for `~` and bare `cd`
    pub home: Option<PathBuf>,
    /// Cleared by `exit`
    pub running: bool,
}

impl CommandContext {
    /// Create a new running session
    pub fn new(cwd: PathBuf, home: Option<PathBuf>) -> Self {
        Self {
            cwd,
            home,
            running: true,
        }
    }

    /// Update the current working directory
    pub fn set_cwd(&mut self, new_cwd: PathBuf) {
        log::debug!("cwd: {} -> {}", self.cwd.display(), new_cwd.display());
        self.cwd = new_cwd;
    }

    /// Resolve user input relative to the current directory
    pub fn resolve(&self, input: &str) -> PathBuf {
        normalize(&self.cwd, input, self.home.as_deref())
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Get the command prompt string
    pub fn get_prompt(&self) -> String {
        format!(
            "Current Directory: {}\nEnter command (type 'help' for all commands): ",
            self.cwd.display()
        )
    }
}
