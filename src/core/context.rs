use std::path::PathBuf;

use anyhow::{Context as _, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::scanner::KeyMatcher;
use crate::config::Config;

/// Where missing reference keys are looked up.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyScope {
    /// Every resource file must define every reference key on its own.
    #[default]
    File,
    /// Keys may be spread across the resource files of a language.
    Language,
}

/// Settings for one validation run, resolved from the config and CLI flags.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub i18n_root: PathBuf,
    pub source_root: PathBuf,
    pub source_extension: String,
    /// Expected resource file extension, always with a leading dot.
    pub resource_extension: String,
    pub matcher: KeyMatcher,
    pub ignores: Vec<Pattern>,
    pub scope: MissingKeyScope,
    pub verbose: bool,
}

impl CheckContext {
    pub fn new(config: &Config, verbose: bool) -> Result<Self> {
        config.validate()?;

        let pattern = Regex::new(&config.key_pattern)
            .with_context(|| format!("Invalid key pattern: \"{}\"", config.key_pattern))?;
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            i18n_root: PathBuf::from(&config.i18n_root),
            source_root: PathBuf::from(&config.source_root),
            source_extension: config.source_extension.clone(),
            resource_extension: normalize_extension(&config.resource_extension),
            matcher: KeyMatcher::new(config.marker.clone(), pattern),
            ignores,
            scope: config.scope,
            verbose,
        })
    }
}

fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim_start_matches('.'))
}
