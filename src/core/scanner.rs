//! Directory scanning and validation.
//!
//! This module provides [`DirectoryScanner`] which walks the numbered files of a
//! segmentation directory and builds the four index-to-path mappings, or
//! rejects the directory.
//!
//! # Public API
//! - [`DirectoryScanner`]: Scans a root directory through a [`PathProbe`]
//! - [`ScanResult`]: The four validated mappings
//! - [`IndexedPaths`]: Ordered index-to-path mapping for one file kind
//!
//! # Validation Rules
//! - **Root**: must be an existing directory
//! - **Primary sequence**: image/segmentation pairs contiguous from 0; the walk
//!   stops at the first index with neither file, and a half pair anywhere
//!   rejects the whole directory
//! - **Sub-image sequence**: probed for every primary index; half pairs are
//!   logged and skipped, gaps are allowed

use crate::core::{
    error::{InvalidReason, Result, SegNavigatorError},
    file_naming::FileKind,
    probe::PathProbe,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Index-to-path mapping for one file kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedPaths(BTreeMap<usize, PathBuf>);

impl IndexedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, path: PathBuf) {
        self.0.insert(index, path);
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.0.get(&index).map(PathBuf::as_path)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    /// Recorded indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.0.iter().map(|(index, path)| (*index, path.as_path()))
    }
}

/// Validated mappings produced by a successful scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub images: IndexedPaths,
    pub image_segmentations: IndexedPaths,
    pub sub_images: IndexedPaths,
    pub sub_image_segmentations: IndexedPaths,
}

impl ScanResult {
    /// Primary indices that have no complete sub-image pair
    pub fn missing_sub_indices(&self) -> Vec<usize> {
        self.images
            .indices()
            .into_iter()
            .filter(|index| !self.sub_images.contains(*index))
            .collect()
    }
}

/// Presence of a volume/segmentation pair at one index
enum PairPresence {
    Both(PathBuf, PathBuf),
    Neither,
    Partial { missing: FileKind, path: PathBuf },
}

/// Scans a segmentation directory through a [`PathProbe`]
pub struct DirectoryScanner<P: PathProbe> {
    probe: P,
}

impl<P: PathProbe> DirectoryScanner<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Build the four mappings for `root`, or fail with `InvalidDirectory`
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        log::debug!("Scanning segmentation directory: {}", root.display());

        if !self.probe.is_dir(root) {
            log::debug!("Not a directory: {}", root.display());
            return Err(SegNavigatorError::invalid_directory(
                root,
                InvalidReason::NotADirectory,
            ));
        }

        let mut result = ScanResult::default();
        self.scan_primary(root, &mut result)?;
        self.scan_sub(root, &mut result);

        log::debug!(
            "Scan complete: {} primary pairs, {} sub pairs",
            result.images.len(),
            result.sub_images.len()
        );
        Ok(result)
    }

    fn scan_primary(&self, root: &Path, result: &mut ScanResult) -> Result<()> {
        let mut index = 0;
        loop {
            match self.probe_pair(root, FileKind::Image, FileKind::ImageSegmentation, index) {
                PairPresence::Both(image, segmentation) => {
                    result.images.insert(index, image);
                    result.image_segmentations.insert(index, segmentation);
                }
                PairPresence::Neither if index == 0 => {
                    let path = FileKind::Image.path_in(root, 0);
                    return Err(SegNavigatorError::missing_file(root, FileKind::Image, path));
                }
                PairPresence::Neither => break,
                PairPresence::Partial { missing, path } => {
                    log::warn!("Missing {} file: {}", missing.description(), path.display());
                    return Err(SegNavigatorError::missing_file(root, missing, path));
                }
            }
            index += 1;
        }
        Ok(())
    }

    fn scan_sub(&self, root: &Path, result: &mut ScanResult) {
        let Some(last) = result.images.last_index() else {
            return;
        };

        for index in 0..=last {
            match self.probe_pair(root, FileKind::SubImage, FileKind::SubImageSegmentation, index) {
                PairPresence::Both(image, segmentation) => {
                    result.sub_images.insert(index, image);
                    result.sub_image_segmentations.insert(index, segmentation);
                }
                PairPresence::Neither => {
                    log::debug!("No sub-image pair at index {index}");
                }
                PairPresence::Partial { missing, path } => {
                    log::warn!("Missing {} file: {}", missing.description(), path.display());
                }
            }
        }
    }

    fn probe_pair(
        &self,
        root: &Path,
        volume_kind: FileKind,
        segmentation_kind: FileKind,
        index: usize,
    ) -> PairPresence {
        let volume = volume_kind.path_in(root, index);
        let segmentation = segmentation_kind.path_in(root, index);

        match (self.probe.exists(&volume), self.probe.exists(&segmentation)) {
            (true, true) => PairPresence::Both(volume, segmentation),
            (false, false) => PairPresence::Neither,
            (true, false) => PairPresence::Partial {
                missing: segmentation_kind,
                path: segmentation,
            },
            (false, true) => PairPresence::Partial {
                missing: volume_kind,
                path: volume,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::testing::MemoryProbe;

    fn names(entries: &[(FileKind, usize)]) -> Vec<String> {
        entries.iter().map(|(kind, i)| kind.name_for(*i)).collect()
    }

    fn primary(count: usize) -> Vec<(FileKind, usize)> {
        (0..count)
            .flat_map(|i| [(FileKind::Image, i), (FileKind::ImageSegmentation, i)])
            .collect()
    }

    fn scan(probe: &MemoryProbe) -> Result<ScanResult> {
        DirectoryScanner::new(probe).scan(probe.root())
    }

    #[test]
    fn test_missing_root_is_invalid() {
        let probe = MemoryProbe::new("/data/case");
        let result = DirectoryScanner::new(&probe).scan(Path::new("/not/a/valid/path"));
        match result {
            Err(SegNavigatorError::InvalidDirectory { reason, .. }) => {
                assert_eq!(reason, InvalidReason::NotADirectory)
            }
            other => panic!("expected InvalidDirectory, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory_is_invalid() {
        let probe = MemoryProbe::new("/data/case");
        assert!(scan(&probe).unwrap_err().is_invalid_directory());
    }

    #[test]
    fn test_image_without_segmentation_is_invalid() {
        let probe = MemoryProbe::new("/data/case").with_files(&names(&[(FileKind::Image, 0)]));
        let err = scan(&probe).unwrap_err();
        match err {
            SegNavigatorError::InvalidDirectory {
                reason: InvalidReason::MissingFile { kind, .. },
                ..
            } => assert_eq!(kind, FileKind::ImageSegmentation),
            other => panic!("expected missing segmentation, got {other:?}"),
        }
    }

    #[test]
    fn test_segmentation_without_image_is_invalid() {
        let probe = MemoryProbe::new("/data/case")
            .with_files(&names(&[(FileKind::ImageSegmentation, 0)]));
        assert!(scan(&probe).unwrap_err().is_invalid_directory());
    }

    #[test]
    fn test_single_pair() -> Result<()> {
        let probe = MemoryProbe::new("/data/case").with_files(&names(&primary(1)));
        let result = scan(&probe)?;
        assert_eq!(result.images.indices(), vec![0]);
        assert_eq!(result.image_segmentations.indices(), vec![0]);
        assert!(result.sub_images.is_empty());
        assert_eq!(
            result.images.get(0),
            Some(Path::new("/data/case/img_0.nii.gz"))
        );
        Ok(())
    }

    #[test]
    fn test_two_pairs() -> Result<()> {
        let probe = MemoryProbe::new("/data/case").with_files(&names(&primary(2)));
        let result = scan(&probe)?;
        assert_eq!(result.images.indices(), vec![0, 1]);
        assert_eq!(result.image_segmentations.indices(), vec![0, 1]);
        Ok(())
    }

    #[test]
    fn test_half_pair_after_valid_index_rejects_directory() {
        let mut entries = primary(1);
        entries.push((FileKind::Image, 1));
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        assert!(scan(&probe).unwrap_err().is_invalid_directory());
    }

    #[test]
    fn test_orphan_segmentation_after_valid_index_rejects_directory() {
        let mut entries = primary(1);
        entries.push((FileKind::ImageSegmentation, 1));
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        assert!(scan(&probe).unwrap_err().is_invalid_directory());
    }

    #[test]
    fn test_walk_stops_at_first_gap() -> Result<()> {
        let mut entries = primary(3);
        entries.extend([(FileKind::Image, 5), (FileKind::ImageSegmentation, 5)]);
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        let result = scan(&probe)?;
        assert_eq!(result.images.indices(), vec![0, 1, 2]);
        assert_eq!(result.image_segmentations.indices(), vec![0, 1, 2]);
        assert_eq!(result.images.last_index(), Some(2));
        Ok(())
    }

    #[test]
    fn test_partial_sub_pair_is_dropped() -> Result<()> {
        let mut entries = primary(2);
        entries.extend([
            (FileKind::SubImage, 0),
            (FileKind::SubImageSegmentation, 0),
            (FileKind::SubImage, 1),
        ]);
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        let result = scan(&probe)?;
        assert_eq!(result.sub_images.indices(), vec![0]);
        assert_eq!(result.sub_image_segmentations.indices(), vec![0]);
        assert_eq!(result.missing_sub_indices(), vec![1]);
        Ok(())
    }

    #[test]
    fn test_sparse_sub_sequence() -> Result<()> {
        let mut entries = primary(4);
        entries.extend([
            (FileKind::SubImage, 1),
            (FileKind::SubImageSegmentation, 1),
            (FileKind::SubImage, 3),
            (FileKind::SubImageSegmentation, 3),
        ]);
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        let result = scan(&probe)?;
        assert_eq!(result.sub_images.indices(), vec![1, 3]);
        assert_eq!(result.missing_sub_indices(), vec![0, 2]);
        Ok(())
    }

    #[test]
    fn test_sub_pairs_beyond_primary_range_are_ignored() -> Result<()> {
        let mut entries = primary(1);
        entries.extend([(FileKind::SubImage, 4), (FileKind::SubImageSegmentation, 4)]);
        let probe = MemoryProbe::new("/data/case").with_files(&names(&entries));
        let result = scan(&probe)?;
        assert!(result.sub_images.is_empty());
        Ok(())
    }
}
