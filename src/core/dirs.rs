use crate::core::error::{Result, SegNavigatorError};
use std::path::PathBuf;

const APP_DIR: &str = "seg-navigator";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => dirs::home_dir()
                .ok_or(SegNavigatorError::ConfigDirectoryNotFound)?
                .join(".config"),
            _ => dirs::config_dir().ok_or(SegNavigatorError::ConfigDirectoryNotFound)?,
        },
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::var("XDG_CACHE_HOME") {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => dirs::cache_dir().unwrap_or_else(std::env::temp_dir),
    };

    Ok(base.join(APP_DIR))
}
