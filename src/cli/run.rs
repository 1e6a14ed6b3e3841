use std::env;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatches to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command found or did
/// - `Err` if the command fails (unreadable file, invalid config or regex)
pub fn run(Arguments { command, check: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(&env::current_dir()?),
        None => check(&args),
    }
}
