//! CLI argument definitions using clap.
//!
//! Running without a subcommand validates the translation files. Every check
//! flag is optional and overrides the config file, which in turn overrides
//! the built-in defaults.
//!
//! ## Commands
//!
//! - (none): Validate Fluent files against `fl!` usage in source code
//! - `init`: Write a default `.fluent-check.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::MissingKeyScope;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Validates Fluent translation files and reports missing, unused and duplicate keys based on the source files.",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        self.check.verbose
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// i18n directory path [default: i18n]
    #[arg(short = 'i', long = "i18n-root", value_name = "PATH")]
    pub i18n_root: Option<PathBuf>,

    /// Source directory path [default: src]
    #[arg(short = 's', long = "source-root", value_name = "PATH")]
    pub source_root: Option<PathBuf>,

    /// Source file extension [default: .rs]
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extension: Option<String>,

    /// Regex for finding the fluent keys in the source files [default: fl!."(.*?)"]
    #[arg(short = 'r', long = "regex", value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Substring a source line must contain before the regex is applied [default: fl!]
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Check missing keys per resource file or across all files of a language
    #[arg(long, value_enum)]
    pub scope: Option<MissingKeyScope>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .fluent-check.json configuration file
    Init,
}
