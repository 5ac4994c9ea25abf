//! Stateful cursor over a [`SegmentationDirectory`].
//!
//! This module provides [`Navigator`] which tracks the current view mode and
//! index and validates every transition against the directory before applying
//! it.
//!
//! # Public API
//! - [`Navigator`]: Cursor with `load_index`, `next`, `previous`, `toggle_compare`
//! - [`NavigationState`]: Snapshot of `(view, index)`
//! - [`AvailableActions`]: Which transitions currently succeed
//!
//! # Transition Rules
//! - **load_index**: the index must have both files for the requested view
//! - **next / previous**: standard view only, one step along the primary sequence
//! - **toggle_compare**: switches view at the same index
//!
//! State is only written after every check passes, so a failed transition
//! leaves `(view, index)` exactly as it was.

use crate::core::{
    directory::SegmentationDirectory,
    error::{Result, SegNavigatorError},
    presenter::{NullPresenter, Presenter},
    view::{FilePair, ViewMode},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub view: ViewMode,
    pub index: Option<usize>,
}

/// Transitions that would currently succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailableActions {
    pub next: bool,
    pub previous: bool,
    pub compare: bool,
}

pub struct Navigator<'a, P: Presenter = NullPresenter> {
    directory: &'a SegmentationDirectory,
    presenter: P,
    state: NavigationState,
}

impl<'a> Navigator<'a, NullPresenter> {
    pub fn new(directory: &'a SegmentationDirectory) -> Self {
        Self::with_presenter(directory, NullPresenter)
    }
}

impl<'a, P: Presenter> Navigator<'a, P> {
    pub fn with_presenter(directory: &'a SegmentationDirectory, presenter: P) -> Self {
        Self {
            directory,
            presenter,
            state: NavigationState::default(),
        }
    }

    pub fn directory(&self) -> &'a SegmentationDirectory {
        self.directory
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn view(&self) -> ViewMode {
        self.state.view
    }

    pub fn index(&self) -> Option<usize> {
        self.state.index
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Pure membership check, never mutates state
    pub fn index_is_valid_for(&self, view: ViewMode, index: usize) -> bool {
        self.directory.index_is_valid_for(view, index)
    }

    /// Pair currently displayed, if an index has been loaded
    pub fn current_pair(&self) -> Option<FilePair> {
        let index = self.state.index?;
        self.directory.pair_for(self.state.view, index)
    }

    /// Display `index` in `view`.
    ///
    /// Fails with [`SegNavigatorError::IndexNotAvailable`] when the view has no
    /// pair at `index`; the current state is kept in that case. Loading the
    /// current `(view, index)` again is allowed.
    pub fn load_index(&mut self, view: ViewMode, index: usize) -> Result<()> {
        let pair = self
            .directory
            .pair_for(view, index)
            .ok_or_else(|| SegNavigatorError::index_not_available(view, index))?;

        log::debug!("Loading index {index} in {view} view");

        self.state = NavigationState {
            view,
            index: Some(index),
        };

        self.presenter.hide();
        self.presenter.show_volume(&pair.volume);
        self.presenter.show_segmentation(&pair.segmentation);
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let index = self.step_origin()?;
        self.load_index(ViewMode::Standard, index + 1)
    }

    pub fn previous(&mut self) -> Result<()> {
        let index = self.step_origin()?;
        let target = index
            .checked_sub(1)
            .ok_or(SegNavigatorError::BeforeFirstIndex {
                view: ViewMode::Standard,
            })?;
        self.load_index(ViewMode::Standard, target)
    }

    /// Switch between standard and sub view at the current index
    pub fn toggle_compare(&mut self) -> Result<()> {
        let index = self.state.index.ok_or(SegNavigatorError::NoIndexLoaded)?;
        self.load_index(self.state.view.toggled(), index)
    }

    /// Which of next / previous / compare would succeed from the current state
    pub fn available_actions(&self) -> AvailableActions {
        let Some(index) = self.state.index else {
            return AvailableActions::default();
        };

        match self.state.view {
            ViewMode::Standard => AvailableActions {
                next: self.index_is_valid_for(ViewMode::Standard, index + 1),
                previous: index
                    .checked_sub(1)
                    .is_some_and(|prev| self.index_is_valid_for(ViewMode::Standard, prev)),
                compare: self.index_is_valid_for(ViewMode::Sub, index),
            },
            ViewMode::Sub => AvailableActions {
                next: false,
                previous: false,
                compare: self.index_is_valid_for(ViewMode::Standard, index),
            },
        }
    }

    fn step_origin(&self) -> Result<usize> {
        let index = self.state.index.ok_or(SegNavigatorError::NoIndexLoaded)?;
        if self.state.view != ViewMode::Standard {
            return Err(SegNavigatorError::StepUnavailableInView {
                view: self.state.view,
            });
        }
        Ok(index)
    }
}
