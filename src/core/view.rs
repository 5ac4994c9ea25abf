//! View modes and the file pairs they display.
//!
//! - [`ViewMode`]: which sequence is presented (primary or sub-image)
//! - [`FilePair`]: volume and segmentation shown together at one index

use crate::core::file_naming::FileKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which of the two sequences the navigator is presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Primary image/segmentation sequence
    #[default]
    Standard,
    /// Optional sub-image comparison sequence
    Sub,
}

impl ViewMode {
    /// The view `toggle_compare` switches to
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Standard => ViewMode::Sub,
            ViewMode::Sub => ViewMode::Standard,
        }
    }

    /// File kinds (volume, segmentation) backing this view
    pub fn kinds(self) -> (FileKind, FileKind) {
        match self {
            ViewMode::Standard => (FileKind::Image, FileKind::ImageSegmentation),
            ViewMode::Sub => (FileKind::SubImage, FileKind::SubImageSegmentation),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Standard => "standard",
            ViewMode::Sub => "sub",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub volume: PathBuf,
    pub segmentation: PathBuf,
}
