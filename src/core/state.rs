//! Session persistence for the command-line front end.
//!
//! Each CLI invocation is a separate process, so the open directory and the
//! navigator position are cached between commands. The navigation core itself
//! never reads or writes this file.
//!
//! # Public API
//! - [`Session`]: Last-used directory, view and index
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable `session.json` under the cache dir
//! - **Timestamping**: Track when the session was last updated
//! - **Re-validation**: Restoring a session re-scans the directory and replays
//!   the stored position through `load_index`

use crate::core::{
    directory::SegmentationDirectory,
    dirs::get_cache_directory,
    error::{Result, SegNavigatorError},
    navigator::Navigator,
    presenter::Presenter,
    view::ViewMode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub directory: PathBuf,
    pub view: ViewMode,
    pub index: usize,
    pub last_updated: DateTime<Utc>,
}

impl Session {
    pub fn new(directory: impl Into<PathBuf>, view: ViewMode, index: usize) -> Self {
        Self {
            directory: directory.into(),
            view,
            index,
            last_updated: Utc::now(),
        }
    }

    /// Snapshot a navigator; `None` until an index has been loaded
    pub fn capture<P: Presenter>(navigator: &Navigator<'_, P>) -> Option<Self> {
        let index = navigator.index()?;
        Some(Self::new(
            navigator.directory().root(),
            navigator.view(),
            index,
        ))
    }

    pub fn session_file() -> Result<PathBuf> {
        Ok(get_cache_directory()?.join("session.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::session_file()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::session_file()?)
    }

    pub fn load_from(session_file: &Path) -> Result<Self> {
        log::debug!("Looking for session file: {}", session_file.display());

        if !session_file.exists() {
            return Err(SegNavigatorError::NoSession);
        }

        let content = fs::read_to_string(session_file).map_err(|e| {
            log::error!(
                "Failed to read session file '{}': {}",
                session_file.display(),
                e
            );
            SegNavigatorError::session_read_failed(session_file, e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            log::error!(
                "Failed to parse session file '{}': {}",
                session_file.display(),
                e
            );
            SegNavigatorError::session_parse_failed(session_file, e)
        })
    }

    pub fn save_to(&self, session_file: &Path) -> Result<()> {
        if let Some(parent) = session_file.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SegNavigatorError::directory_creation_failed(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(session_file, json)
            .map_err(|e| SegNavigatorError::session_write_failed(session_file, e))?;

        log::debug!(
            "Saved session {} ({} view, index {})",
            self.directory.display(),
            self.view,
            self.index
        );
        Ok(())
    }

    /// Re-scan the stored directory
    pub fn open_directory(&self) -> Result<SegmentationDirectory> {
        SegmentationDirectory::open(&self.directory)
    }

    /// Replay the stored position on a navigator over the re-scanned directory
    pub fn restore<P: Presenter>(&self, navigator: &mut Navigator<'_, P>) -> Result<()> {
        navigator.load_index(self.view, self.index)
    }
}
