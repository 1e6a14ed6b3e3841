use std::{env, path::Path};

use anyhow::Result;
use colored::Colorize;

use super::CommandResult;
use crate::{
    cli::args::CheckArgs,
    config::{Config, load_config},
    core::{CheckContext, EnvironmentError, run_check},
};

pub fn check(args: &CheckArgs) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    check_in(&cwd, args)
}

/// Runs the check with the config discovered from `dir`.
pub fn check_in(dir: &Path, args: &CheckArgs) -> Result<CommandResult> {
    let loaded = load_config(dir)?;
    if args.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("{} Using config {}", "note:".bold(), path.display());
    }

    let config = apply_overrides(loaded.config, args);
    let ctx = CheckContext::new(&config, args.verbose)?;

    match run_check(&ctx) {
        Ok(outcome) => Ok(CommandResult::Check(outcome)),
        Err(err) => match err.downcast::<EnvironmentError>() {
            Ok(env_err) => Ok(CommandResult::Aborted(env_err)),
            Err(err) => Err(err),
        },
    }
}

/// CLI flags take precedence over the config file.
pub fn apply_overrides(mut config: Config, args: &CheckArgs) -> Config {
    if let Some(path) = &args.i18n_root {
        config.i18n_root = path.display().to_string();
    }
    if let Some(path) = &args.source_root {
        config.source_root = path.display().to_string();
    }
    if let Some(ext) = &args.extension {
        config.source_extension = ext.clone();
    }
    if let Some(pattern) = &args.regex {
        config.key_pattern = pattern.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }
    if let Some(scope) = args.scope {
        config.scope = scope;
    }
    config
}
