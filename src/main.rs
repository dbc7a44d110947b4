mod app;
mod config;
mod paths;
mod shell;

use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;

use app::App;
use config::Config;
use paths::PathManager;
use shell::commands::{builtin_registry, CommandContext, CommandDispatcher};
use shell::console::StdConsole;

fn main() -> ExitCode {
    let app = App::parse();

    env_logger::builder()
        .filter_level(app.log_level)
        .parse_env(env_logger::Env::default())
        .init();

    let paths = PathManager::new();
    paths.log_paths();
    let config = Config::load(app.config.as_deref(), &paths);

    let cwd = match paths::initial_directory(app.start_dir.as_deref()) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error determining initial directory: {}", err);
            return ExitCode::from(1);
        }
    };
    let home = paths::resolve_home(env::var_os("HOME"), config.home_dir.as_deref());

    log::info!("Current config:");
    log::info!("Start directory: {}", cwd.display());
    match &home {
        Some(home) => log::info!("Home directory: {}", home.display()),
        None => log::warn!("No home directory set; '~' and bare 'cd' are unavailable"),
    }

    let mut context = CommandContext::new(cwd, home);
    let dispatcher = CommandDispatcher::with_registry(builtin_registry());
    let mut console = StdConsole::new(io::stdin().lock(), io::stdout());

    match shell::repl::run(&dispatcher, &mut context, &mut console, config.show_welcome) {
        Ok(()) => {
            log::info!("Session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Console failure: {}", err);
            ExitCode::FAILURE
        }
    }
}
