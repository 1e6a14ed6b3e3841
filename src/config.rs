use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::MissingKeyScope;

pub const CONFIG_FILE_NAME: &str = ".fluent-check.json";

/// Matches `fl!("key")` and captures the quoted literal.
pub const DEFAULT_KEY_PATTERN: &str = r#"fl!."(.*?)""#;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_i18n_root")]
    pub i18n_root: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_resource_extension")]
    pub resource_extension: String,
    #[serde(default = "default_key_pattern", alias = "regex")]
    pub key_pattern: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub scope: MissingKeyScope,
}

fn default_i18n_root() -> String {
    "i18n".to_string()
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_source_extension() -> String {
    ".rs".to_string()
}

fn default_resource_extension() -> String {
    ".ftl".to_string()
}

fn default_key_pattern() -> String {
    DEFAULT_KEY_PATTERN.to_string()
}

fn default_marker() -> String {
    "fl!".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n_root: default_i18n_root(),
            source_root: default_source_root(),
            source_extension: default_source_extension(),
            resource_extension: default_resource_extension(),
            key_pattern: default_key_pattern(),
            marker: default_marker(),
            ignores: Vec::new(),
            scope: MissingKeyScope::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the key pattern is not a valid regex or any glob
    /// pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        Regex::new(&self.key_pattern)
            .with_context(|| format!("Invalid key pattern: \"{}\"", self.key_pattern))?;

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.resource_extension.trim_start_matches('.').is_empty() {
            anyhow::bail!("'resourceExtension' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
