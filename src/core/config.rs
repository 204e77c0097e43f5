use crate::core::build::Build;
use crate::error::{InstallerError, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOWNLOAD_URL: &str = "https://code.visualstudio.com/sha/download";

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV: &str = "VSCODE_INSTALLER_CONFIG";

/// Optional user settings. Command-line flags always take precedence.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub build: Option<String>,
    pub download_directory: Option<PathBuf>,
    pub install_directory: Option<PathBuf>,
    pub symlink_directory: Option<PathBuf>,
    pub download_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// A missing file yields the defaults; nothing is written back.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("no settings file at {}", config_path.display());
            return Ok(Config::default());
        }

        debug!("loading settings from {}", config_path.display());
        let content = std::fs::read_to_string(config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            InstallerError::config_error(format!("{}: {e}", config_path.display()))
        })
    }

    pub fn build(&self) -> Result<Option<Build>> {
        self.build.as_deref().map(Build::parse).transpose()
    }

    pub fn download_url(&self) -> &str {
        self.download_url.as_deref().unwrap_or(DEFAULT_DOWNLOAD_URL)
    }
}

fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("vscode-installer").join("config.json"))
        .ok_or_else(|| InstallerError::config_error("configuration directory not found"))
}
