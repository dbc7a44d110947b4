use std::collections::HashMap;

use thiserror::Error;

use super::command_trait::Command;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command '{0}' is already registered")]
    Duplicate(String),
}

/// Registry that holds all available commands in registration order
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    /// Command name to position in `commands`
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Create a new empty command registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. A name that is already taken is rejected and the
    /// first registration stays in place.
    pub fn register_command(&mut self, command: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name();
        if self.index.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.index.insert(name, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by exact name
    pub fn find(&self, command_name: &str) -> Option<&dyn Command> {
        self.index
            .get(command_name)
            .map(|&position| self.commands[position].as_ref())
    }

    /// All commands in the order they were registered
    pub fn all(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
