//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SegNavigatorError`] which covers every failure mode of
//! scanning a segmentation directory, navigating it, and persisting the CLI
//! session. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`SegNavigatorError`]: Main error enum covering all failure modes
//! - [`InvalidReason`]: Why a directory was rejected by the scanner
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SegNavigatorError>`
//!
//! # Error Categories
//! - **Scanning**: Root path missing, incomplete primary pairs
//! - **Navigation**: Index not available for a view, invalid steps
//! - **Session/config**: Read, parse and write failures of the JSON files

use crate::core::file_naming::FileKind;
use crate::core::view::ViewMode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why the scanner refused a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The root path does not exist or is not a directory
    NotADirectory,
    /// A required primary-sequence file is missing
    MissingFile { kind: FileKind, path: PathBuf },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotADirectory => write!(f, "path is not a directory"),
            InvalidReason::MissingFile { kind, path } => {
                write!(f, "missing {} file {}", kind.description(), path.display())
            }
        }
    }
}

/// Domain-specific error types for seg-navigator
#[derive(Error, Debug)]
pub enum SegNavigatorError {
    // Scanner errors
    #[error("Not a valid segmentation directory: {path} ({reason})")]
    InvalidDirectory { path: PathBuf, reason: InvalidReason },

    // Navigation errors
    #[error("Index {index} is not available in {view} view")]
    IndexNotAvailable { view: ViewMode, index: usize },

    #[error("There is no index before 0 in {view} view")]
    BeforeFirstIndex { view: ViewMode },

    #[error("Next/previous is not available in {view} view. Use 'compare' to return to standard view")]
    StepUnavailableInView { view: ViewMode },

    #[error("No index has been loaded yet")]
    NoIndexLoaded,

    // Session errors
    #[error("No directory is open. Run 'open <dir>' first.")]
    NoSession,

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read session file '{path}': {source}")]
    SessionReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    SessionParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    SessionWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SegNavigatorError
pub type Result<T> = std::result::Result<T, SegNavigatorError>;

impl SegNavigatorError {
    /// Create an invalid directory error
    pub fn invalid_directory(path: impl Into<PathBuf>, reason: InvalidReason) -> Self {
        Self::InvalidDirectory {
            path: path.into(),
            reason,
        }
    }

    /// Create an invalid directory error for a missing primary file
    pub fn missing_file(root: impl Into<PathBuf>, kind: FileKind, path: impl Into<PathBuf>) -> Self {
        Self::invalid_directory(
            root,
            InvalidReason::MissingFile {
                kind,
                path: path.into(),
            },
        )
    }

    /// Create an index not available error
    pub fn index_not_available(view: ViewMode, index: usize) -> Self {
        Self::IndexNotAvailable { view, index }
    }

    pub fn directory_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SessionParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn session_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while scanning a directory
    pub fn is_invalid_directory(&self) -> bool {
        matches!(self, Self::InvalidDirectory { .. })
    }

    /// True for recoverable navigation failures: the requested (view, index)
    /// has no backing files
    pub fn is_index_not_available(&self) -> bool {
        matches!(
            self,
            Self::IndexNotAvailable { .. } | Self::BeforeFirstIndex { .. }
        )
    }
}
