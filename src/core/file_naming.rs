//! Canonical file names of a segmentation directory.
//!
//! This module defines [`FileKind`], the closed set of files a segmentation
//! directory can contain, and the naming scheme that maps a kind and an index
//! to a file name. The names must match existing on-disk datasets exactly.
//!
//! # Naming Scheme
//! - **Image**: `img_{index}.nii.gz`
//! - **ImageSegmentation**: `img_{index}_segmentation.nrrd`
//! - **SubImage**: `img_sub_{index}.nii.gz`
//! - **SubImageSegmentation**: `img_sub_{index}_segmentation.nrrd`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of file stored in a segmentation directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Primary image volume
    Image,
    /// Ground-truth segmentation of the primary image
    ImageSegmentation,
    /// Optional comparison image
    SubImage,
    /// Segmentation of the comparison image
    SubImageSegmentation,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Image,
        FileKind::ImageSegmentation,
        FileKind::SubImage,
        FileKind::SubImageSegmentation,
    ];

    /// File name for this kind at `index`
    pub fn name_for(self, index: usize) -> String {
        match self {
            FileKind::Image => format!("img_{index}.nii.gz"),
            FileKind::ImageSegmentation => format!("img_{index}_segmentation.nrrd"),
            FileKind::SubImage => format!("img_sub_{index}.nii.gz"),
            FileKind::SubImageSegmentation => format!("img_sub_{index}_segmentation.nrrd"),
        }
    }

    /// Full path of this kind at `index` inside `dir`
    pub fn path_in(self, dir: &Path, index: usize) -> PathBuf {
        dir.join(self.name_for(index))
    }

    /// Human-readable label used in warnings and CLI output
    pub fn description(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::ImageSegmentation => "segmentation",
            FileKind::SubImage => "sub-image",
            FileKind::SubImageSegmentation => "sub-image segmentation",
        }
    }

    pub fn is_sub(self) -> bool {
        matches!(self, FileKind::SubImage | FileKind::SubImageSegmentation)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Free-function form of [`FileKind::name_for`]
pub fn name_for(kind: FileKind, index: usize) -> String {
    kind.name_for(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_at_index_zero() {
        assert_eq!(name_for(FileKind::Image, 0), "img_0.nii.gz");
        assert_eq!(name_for(FileKind::ImageSegmentation, 0), "img_0_segmentation.nrrd");
        assert_eq!(name_for(FileKind::SubImage, 0), "img_sub_0.nii.gz");
        assert_eq!(
            name_for(FileKind::SubImageSegmentation, 0),
            "img_sub_0_segmentation.nrrd"
        );
    }

    #[test]
    fn test_multi_digit_index() {
        assert_eq!(FileKind::Image.name_for(42), "img_42.nii.gz");
        assert_eq!(
            FileKind::SubImageSegmentation.name_for(105),
            "img_sub_105_segmentation.nrrd"
        );
    }

    #[test]
    fn test_path_in_joins_directory() {
        let path = FileKind::ImageSegmentation.path_in(Path::new("/data/case"), 3);
        assert_eq!(path, PathBuf::from("/data/case/img_3_segmentation.nrrd"));
    }

    #[test]
    fn test_names_are_distinct_per_kind() {
        let names: std::collections::HashSet<String> =
            FileKind::ALL.iter().map(|kind| kind.name_for(7)).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_is_sub() {
        assert!(!FileKind::Image.is_sub());
        assert!(!FileKind::ImageSegmentation.is_sub());
        assert!(FileKind::SubImage.is_sub());
        assert!(FileKind::SubImageSegmentation.is_sub());
    }
}
