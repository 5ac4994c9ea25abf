use crate::commands::status::print_position;
use crate::core::{
    command_init::persist_navigator,
    config::NavigatorConfig,
    directory::SegmentationDirectory,
    error::Result,
    navigator::Navigator,
    output::{print_section_header, ConsolePresenter},
    view::ViewMode,
};
use std::path::Path;

/// Scan `dir`, show its first pair and make it the current session
pub fn execute_open(dir: &Path) -> Result<()> {
    let config = NavigatorConfig::load_or_create()?;

    let root = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let directory = SegmentationDirectory::open(&root)?;

    print_section_header(&format!("Opened {}", directory.root().display()));

    let mut navigator = Navigator::with_presenter(&directory, ConsolePresenter::new());
    navigator.load_index(ViewMode::Standard, 0)?;
    print_position(&navigator);

    persist_navigator(&config, &navigator)?;
    Ok(())
}
