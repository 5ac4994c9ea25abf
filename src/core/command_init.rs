//! Centralized initialization for navigation commands.
//!
//! Every command other than `scan` and `open` continues from the session left
//! by a previous invocation. [`NavigationInit`] handles that common pattern:
//!
//! # Initialization Steps
//! 1. **Config check**: Sessions must be enabled in the config
//! 2. **Session loading**: Read the last directory, view and index
//! 3. **Directory scan**: Re-validate the directory on disk
//!
//! The caller then builds a [`Navigator`] over the returned directory and
//! replays the stored position with [`NavigationContext::restore`]. The
//! navigator borrows the directory, so the two cannot live in one struct.

use crate::core::{
    config::NavigatorConfig,
    directory::SegmentationDirectory,
    error::{Result, SegNavigatorError},
    navigator::Navigator,
    output::ConsolePresenter,
    state::Session,
};

/// Session and re-scanned directory for a navigation command
pub struct NavigationContext {
    pub config: NavigatorConfig,
    pub session: Session,
    pub directory: SegmentationDirectory,
}

pub struct NavigationInit;

impl NavigationInit {
    pub fn initialize() -> Result<NavigationContext> {
        let config = NavigatorConfig::load_or_create()?;
        Self::initialize_with_config(config)
    }

    pub fn initialize_with_config(config: NavigatorConfig) -> Result<NavigationContext> {
        if !config.remember_session {
            log::debug!("Sessions disabled in config");
            return Err(SegNavigatorError::NoSession);
        }

        log::debug!("Loading session for navigation command");
        let session = Session::load()?;

        let directory = session.open_directory().map_err(|e| {
            log::warn!(
                "Stored directory {} is no longer valid: {e}",
                session.directory.display()
            );
            e
        })?;

        Ok(NavigationContext {
            config,
            session,
            directory,
        })
    }
}

impl NavigationContext {
    /// Navigator positioned at the stored `(view, index)`, printing nothing
    /// until the caller turns its presenter back on
    pub fn restore(&self) -> Result<Navigator<'_, ConsolePresenter>> {
        let mut navigator = Navigator::with_presenter(&self.directory, ConsolePresenter::quiet());
        self.session.restore(&mut navigator)?;
        navigator.presenter_mut().set_quiet(false);
        Ok(navigator)
    }

    /// Persist the navigator's position when sessions are enabled
    pub fn persist(&self, navigator: &Navigator<'_, ConsolePresenter>) -> Result<()> {
        persist_navigator(&self.config, navigator)
    }
}

pub fn persist_navigator(
    config: &NavigatorConfig,
    navigator: &Navigator<'_, ConsolePresenter>,
) -> Result<()> {
    if !config.remember_session {
        return Ok(());
    }
    match Session::capture(navigator) {
        Some(session) => session.save(),
        None => Ok(()),
    }
}
