use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{SortColumn, SortDirection, pipeline::DEFAULT_EXTENSION};

pub const CONFIG_FILE_NAME: &str = ".poreportrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folder containing the catalog files to report on.
    #[serde(default = "default_folder_path", alias = "folder")]
    pub folder_path: String,
    /// Catalog file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub sort: SortColumn,
    #[serde(default)]
    pub order: SortDirection,
}

fn default_folder_path() -> String {
    "./translations".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder_path: default_folder_path(),
            extension: default_extension(),
            sort: SortColumn::default(),
            order: SortDirection::default(),
        }
    }
}

impl Config {
    /// Validate configuration values that do not touch the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.folder_path.trim().is_empty() {
            anyhow::bail!("'folderPath' must not be empty");
        }
        validate_extension(&self.extension)
    }
}

/// An extension must be a bare name such as `po`, without dots or separators.
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() || extension.contains(['.', '/', '\\']) {
        anyhow::bail!(
            "Invalid 'extension': \"{}\" (expected a bare extension such as \"po\")",
            extension
        );
    }
    Ok(())
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
    /// Location of the loaded file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory a relative `folderPath` is resolved against: the config
    /// file's directory, or `cwd` when no config file was found.
    pub fn base_dir(&self, cwd: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
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

/// The configured folder is unusable. Detected before any catalog is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotADirectory(PathBuf),
    NotReadable(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotADirectory(path) => write!(f, "{} is not a directory.", path.display()),
            ConfigError::NotReadable(path) => {
                write!(f, "{} is not a readable directory.", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve `folder` against `base_dir` and check it is a readable directory.
///
/// Returns the absolute folder path.
pub fn validate_folder(folder: &Path, base_dir: &Path) -> std::result::Result<PathBuf, ConfigError> {
    let folder = if folder.is_absolute() {
        folder.to_path_buf()
    } else {
        base_dir.join(folder)
    };

    if !folder.is_dir() {
        return Err(ConfigError::NotADirectory(folder));
    }
    if fs::read_dir(&folder).is_err() {
        return Err(ConfigError::NotReadable(folder));
    }

    Ok(folder.canonicalize().unwrap_or(folder))
}
