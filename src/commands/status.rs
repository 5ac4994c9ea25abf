use crate::core::{
    command_init::NavigationInit,
    error::Result,
    navigator::Navigator,
    output::{format_actions, format_field, print_section_header},
    presenter::Presenter,
    view::ViewMode,
};

pub fn execute_status() -> Result<()> {
    let context = NavigationInit::initialize()?;
    let navigator = context.restore()?;

    print_navigation_status(&navigator);
    Ok(())
}

/// Print directory, position, displayed pair and enabled actions
pub fn print_navigation_status<P: Presenter>(navigator: &Navigator<'_, P>) {
    let directory = navigator.directory();

    print_section_header("Segmentation Directory");
    println!(
        "{}",
        format_field("Directory", &directory.root().display().to_string())
    );
    println!("{}", format_field("View", navigator.view().as_str()));

    match navigator.index() {
        Some(index) => println!(
            "{}",
            format_field(
                "Index",
                &format!("{index} (0-{} available)", directory.len().saturating_sub(1))
            )
        ),
        None => println!("{}", format_field("Index", "-none-")),
    }

    if let Some(pair) = navigator.current_pair() {
        println!(
            "{}",
            format_field("Volume", &pair.volume.display().to_string())
        );
        println!(
            "{}",
            format_field("Segmentation", &pair.segmentation.display().to_string())
        );
    }

    println!();
    println!("{}", format_actions(&navigator.available_actions()));
    println!();
}

/// One-line summary printed after a successful transition
pub fn print_position<P: Presenter>(navigator: &Navigator<'_, P>) {
    let Some(index) = navigator.index() else {
        return;
    };
    let last = navigator.directory().len().saturating_sub(1);
    let position = match navigator.view() {
        ViewMode::Standard => format!("index {index} of 0-{last} (standard view)"),
        ViewMode::Sub => format!("index {index} (sub view)"),
    };
    println!("{}", format_field("Position", &position));
    println!("{}", format_actions(&navigator.available_actions()));
    println!();
}
