//! The interactive explorer: filesystem layer, command set and the session loop.
pub mod commands;
pub mod console;
pub mod filesystem;
pub mod parser;
pub mod repl;
