use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::Init(InitSummary {
            path: config_path,
            created: false,
        }));
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::Init(InitSummary {
        path: config_path,
        created: true,
    }))
}
