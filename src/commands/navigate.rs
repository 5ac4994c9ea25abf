use crate::commands::status::print_position;
use crate::core::{
    command_init::NavigationInit,
    error::Result,
    navigator::Navigator,
    output::ConsolePresenter,
    view::ViewMode,
};

/// Load `index` in standard view, or sub view when `sub` is set
pub fn execute_goto(index: usize, sub: bool) -> Result<()> {
    let view = if sub { ViewMode::Sub } else { ViewMode::Standard };
    run_transition(|navigator| navigator.load_index(view, index))
}

pub fn execute_next() -> Result<()> {
    run_transition(|navigator| navigator.next())
}

pub fn execute_prev() -> Result<()> {
    run_transition(|navigator| navigator.previous())
}

/// Toggle between standard and sub view at the current index
pub fn execute_compare() -> Result<()> {
    run_transition(|navigator| navigator.toggle_compare())
}

/// Restore the session, apply one transition, print and persist the result
fn run_transition<F>(transition: F) -> Result<()>
where
    F: FnOnce(&mut Navigator<'_, ConsolePresenter>) -> Result<()>,
{
    let context = NavigationInit::initialize()?;
    let mut navigator = context.restore()?;

    println!();
    transition(&mut navigator)?;
    print_position(&navigator);

    context.persist(&navigator)
}
