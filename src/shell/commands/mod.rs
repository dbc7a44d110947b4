// Trait-based command system
pub mod command_trait;
pub mod context;
pub mod registry;
pub mod dispatcher;
pub mod format;
pub mod builtin_commands;
pub mod ls_command;
pub mod file_commands;
pub mod stat_command;
pub mod search_command;
pub mod transfer_commands;
pub mod du_command;

pub use command_trait::Command;
pub use context::CommandContext;
pub use registry::CommandRegistry;
pub use dispatcher::CommandDispatcher;
pub use builtin_commands::{CdCommand, ExitCommand, HelpCommand};
pub use ls_command::LsCommand;
pub use file_commands::{MkdirCommand, RmCommand, RmdirCommand, TouchCommand};
pub use stat_command::StatCommand;
pub use search_command::SearchCommand;
pub use transfer_commands::{CpCommand, MvCommand};
pub use du_command::DuCommand;

/// Registry holding every built-in command, in the order `help` lists them
pub fn builtin_registry() -> CommandRegistry {
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(HelpCommand),
        Box::new(ExitCommand),
        Box::new(CdCommand),
        Box::new(LsCommand),
        Box::new(TouchCommand),
        Box::new(MkdirCommand),
        Box::new(RmCommand),
        Box::new(RmdirCommand),
        Box::new(StatCommand),
        Box::new(SearchCommand),
        Box::new(CpCommand),
        Box::new(MvCommand),
        Box::new(DuCommand),
    ];

    let mut registry = CommandRegistry::new();
    for command in commands {
        if let Err(err) = registry.register_command(command) {
            log::warn!("{}", err);
        }
    }
    registry
}
