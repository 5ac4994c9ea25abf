//! Presentation hook invoked by the navigator.
//!
//! The navigator never renders anything itself; after a successful transition
//! it tells a [`Presenter`] which volume and segmentation to display.

use std::path::Path;

pub trait Presenter {
    fn show_volume(&mut self, path: &Path);
    fn show_segmentation(&mut self, path: &Path);
    /// Release whatever is currently displayed
    fn hide(&mut self);
}

/// Presenter that ignores every call
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_volume(&mut self, _path: &Path) {}
    fn show_segmentation(&mut self, _path: &Path) {}
    fn hide(&mut self) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show_volume(&mut self, path: &Path) {
        (**self).show_volume(path)
    }

    fn show_segmentation(&mut self, path: &Path) {
        (**self).show_segmentation(path)
    }

    fn hide(&mut self) {
        (**self).hide()
    }
}
