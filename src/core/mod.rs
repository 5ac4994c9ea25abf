//! Core functionality for the seg-navigator tool.
//!
//! This module provides the segmentation directory scanner, the navigator
//! state machine, and the CLI support pieces (session, config, output).

pub mod command_init;
pub mod config;
pub mod directory;
pub mod dirs;
pub mod error;
pub mod file_naming;
pub mod navigator;
pub mod output;
pub mod presenter;
pub mod probe;
pub mod scanner;
pub mod state;
pub mod view;

// === Error handling ===
pub use error::{InvalidReason, Result, SegNavigatorError};

// === File naming ===
// Canonical names such as img_3.nii.gz / img_3_segmentation.nrrd
pub use file_naming::{name_for, FileKind};

// === Scanning ===
pub use probe::{DiskProbe, PathProbe};
pub use scanner::{DirectoryScanner, IndexedPaths, ScanResult};

// === Directory and navigation ===
pub use directory::SegmentationDirectory;
pub use navigator::{AvailableActions, NavigationState, Navigator};
pub use presenter::{NullPresenter, Presenter};
pub use view::{FilePair, ViewMode};

// === CLI support ===
pub use command_init::{NavigationContext, NavigationInit};
pub use config::NavigatorConfig;
pub use state::Session;

// === Output formatting ===
pub use output::{
    format_actions, format_field, print_error, print_info, print_section_header, print_success,
    ConsolePresenter,
};
