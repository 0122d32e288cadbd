use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::{args::InitCommand, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, Config};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    let mut config = Config::default();
    if let Some(folder) = cmd.folder {
        config.folder_path = folder;
    }
    config.validate()?;

    let json = serde_json::to_string_pretty(&config).context("Failed to generate default config.")?;
    fs::write(config_path, json)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path.to_path_buf(),
            folder_path: config.folder_path,
        }),
        exit_status: ExitStatus::Success,
    })
}
