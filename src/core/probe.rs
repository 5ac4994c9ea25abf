//! Filesystem existence checks used by the scanner.
//!
//! The scanner only ever asks two questions of the filesystem, so they are
//! abstracted behind [`PathProbe`]. [`DiskProbe`] answers them from the real
//! filesystem; tests substitute an in-memory set of paths.

use std::path::Path;

/// Capability to ask whether a path exists
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`PathProbe`] backed by `std::fs` metadata
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProbe;

impl PathProbe for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl<P: PathProbe + ?Sized> PathProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
