use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, SegNavigatorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User settings read from `<config dir>/seg-navigator/config.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavigatorConfig {
    /// List primary indices without a sub-image pair in `scan` output
    pub report_sub_gaps: bool,
    /// Persist the open directory, view and index between invocations
    pub remember_session: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            report_sub_gaps: true,
            remember_session: true,
        }
    }
}

impl NavigatorConfig {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join("config.json"))
    }

    pub fn load_or_create() -> Result<Self> {
        let config_file = Self::config_file()?;

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            let config = serde_json::from_str(&content)?;
            log::debug!("Loaded config from {}", config_file.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| SegNavigatorError::directory_creation_failed(&config_dir, e))?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }
}
