//! The validated segmentation directory.
//!
//! [`SegmentationDirectory`] is only ever constructed from a successful scan,
//! so every value of it holds at least the index 0 primary pair. It is
//! read-only after construction; navigation state lives in the
//! [`Navigator`](crate::core::navigator::Navigator) that borrows it.

use crate::core::{
    error::Result,
    presenter::Presenter,
    probe::{DiskProbe, PathProbe},
    scanner::{DirectoryScanner, IndexedPaths, ScanResult},
    view::{FilePair, ViewMode},
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SegmentationDirectory {
    root: PathBuf,
    paths: ScanResult,
}

impl SegmentationDirectory {
    /// Scan `root` on the real filesystem
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(root, DiskProbe)
    }

    /// Scan `root` through any [`PathProbe`]
    pub fn open_with<P: PathProbe>(root: impl Into<PathBuf>, probe: P) -> Result<Self> {
        let root = root.into();
        let paths = DirectoryScanner::new(probe).scan(&root)?;
        log::info!(
            "Loaded segmentation directory {} ({} images)",
            root.display(),
            paths.images.len()
        );
        Ok(Self { root, paths })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images(&self) -> &IndexedPaths {
        &self.paths.images
    }

    pub fn image_segmentations(&self) -> &IndexedPaths {
        &self.paths.image_segmentations
    }

    pub fn sub_images(&self) -> &IndexedPaths {
        &self.paths.sub_images
    }

    pub fn sub_image_segmentations(&self) -> &IndexedPaths {
        &self.paths.sub_image_segmentations
    }

    pub fn scan_result(&self) -> &ScanResult {
        &self.paths
    }

    /// Number of primary image/segmentation pairs
    pub fn len(&self) -> usize {
        self.paths.images.len()
    }

    /// Always false: a scanned directory holds at least index 0
    pub fn is_empty(&self) -> bool {
        self.paths.images.is_empty()
    }

    fn mappings(&self, view: ViewMode) -> (&IndexedPaths, &IndexedPaths) {
        match view {
            ViewMode::Standard => (&self.paths.images, &self.paths.image_segmentations),
            ViewMode::Sub => (&self.paths.sub_images, &self.paths.sub_image_segmentations),
        }
    }

    /// Whether `index` has both files recorded for `view`
    pub fn index_is_valid_for(&self, view: ViewMode, index: usize) -> bool {
        let (volumes, segmentations) = self.mappings(view);
        volumes.contains(index) && segmentations.contains(index)
    }

    /// Volume and segmentation shown for `view` at `index`
    pub fn pair_for(&self, view: ViewMode, index: usize) -> Option<FilePair> {
        let (volumes, segmentations) = self.mappings(view);
        Some(FilePair {
            volume: volumes.get(index)?.to_path_buf(),
            segmentation: segmentations.get(index)?.to_path_buf(),
        })
    }

    /// Ask the presenter to release what it shows for this directory.
    /// The directory itself is left untouched.
    pub fn unload<R: Presenter + ?Sized>(&self, presenter: &mut R) {
        log::debug!("Unloading segmentation directory {}", self.root.display());
        presenter.hide();
    }
}
