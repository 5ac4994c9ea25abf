//! Seg Navigator - index and navigate numbered image/segmentation datasets.
//!
//! A segmentation directory holds `img_{n}.nii.gz` volumes with their
//! `img_{n}_segmentation.nrrd` ground truth, numbered from 0, plus optional
//! `img_sub_{n}` comparison pairs. This library validates such a directory and
//! provides a navigator over it.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`SegmentationDirectory`]: scanned and validated directory
//! - [`Navigator`]: view/index cursor with next, previous and compare
//! - [`PathProbe`] and [`Presenter`]: seams for the filesystem and the display
//! - [`SegNavigatorError`]: error handling

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    name_for,
    AvailableActions,
    DirectoryScanner,
    DiskProbe,
    FileKind,
    FilePair,
    IndexedPaths,
    InvalidReason,
    NavigationState,
    Navigator,
    NullPresenter,
    PathProbe,
    Presenter,
    Result,
    ScanResult,
    SegNavigatorError,
    SegmentationDirectory,
    ViewMode,
};
