//! Command-line interface layer.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, CheckArgs, Command};
pub use commands::CommandResult;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result))
}

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match result {
        CommandResult::Check(outcome) if outcome.is_success() => ExitStatus::Success,
        CommandResult::Check(_) | CommandResult::Aborted(_) => ExitStatus::Failure,
        CommandResult::Init(summary) if summary.created => ExitStatus::Success,
        CommandResult::Init(_) => ExitStatus::Failure,
    }
}
