use std::io;

use super::commands::{CommandContext, CommandDispatcher};
use super::console::Console;

pub const WELCOME: &str = "Welcome to MiniFileExplorer!\n";

/// Prompt, read, dispatch until `exit` or end of input
pub fn run(
    dispatcher: &CommandDispatcher,
    context: &mut CommandContext,
    console: &mut dyn Console,
    show_welcome: bool,
) -> io::Result<()> {
    if show_welcome {
        console.print(WELCOME)?;
    }

    while context.running {
        console.print(&context.get_prompt())?;
        let Some(line) = console.read_line()? else {
            log::debug!("End of input, leaving session");
            break;
        };
        dispatcher.execute(&line, context, console)?;
    }

    Ok(())
}
