use std::path::PathBuf;

use crate::core::{CheckOutcome, EnvironmentError};

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when the file already existed and was left untouched.
    pub created: bool,
}

/// Result of running a fluent-check command
#[derive(Debug)]
pub enum CommandResult {
    /// Every language was checked.
    Check(CheckOutcome),
    /// The check stopped before any language was validated.
    Aborted(EnvironmentError),
    Init(InitSummary),
}
