use crate::constants::{ETC_GROUP_FILE, ETC_GSHADOW_FILE, ETC_PASSWD_FILE, ETC_SHADOW_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the four account database files.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountFilesConfig {
    pub passwd_file: PathBuf,
    pub shadow_file: PathBuf,
    pub group_file: PathBuf,
    pub gshadow_file: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub accounts: AccountFilesConfig,
}

impl Default for AccountFilesConfig {
    fn default() -> Self {
        Self {
            passwd_file: PathBuf::from(ETC_PASSWD_FILE),
            shadow_file: PathBuf::from(ETC_SHADOW_FILE),
            group_file: PathBuf::from(ETC_GROUP_FILE),
            gshadow_file: PathBuf::from(ETC_GSHADOW_FILE),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
