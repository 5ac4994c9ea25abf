//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all seg-navigator
//! output, plus [`ConsolePresenter`], the presenter the CLI hands to the
//! navigator so a loaded pair is printed instead of rendered.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, bright_black for muted text
//! - **Standardized spacing**: Newline before and after all command outputs

use crate::core::{navigator::AvailableActions, presenter::Presenter};
use colored::*;
use std::path::Path;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Render a `label: value` line with a muted label
pub fn format_field(label: &str, value: &str) -> String {
    format!("   {:<14} {}", format!("{label}:").bright_black(), value.white())
}

/// Render the enabled/disabled state of the navigation actions
pub fn format_actions(actions: &AvailableActions) -> String {
    let render = |name: &str, enabled: bool| {
        if enabled {
            format!("[{}]", name.green())
        } else {
            format!("[{}]", name.bright_black().strikethrough())
        }
    };

    format!(
        "   {} {} {}",
        render("prev", actions.previous),
        render("next", actions.next),
        render("compare", actions.compare)
    )
}

/// Presenter that prints the files the navigator asks to display
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    quiet: bool,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presenter that swallows output, used when replaying a stored session
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }
}

impl Presenter for ConsolePresenter {
    fn show_volume(&mut self, path: &Path) {
        if !self.quiet {
            println!("{}", format_field("Volume", &path.display().to_string()));
        }
    }

    fn show_segmentation(&mut self, path: &Path) {
        if !self.quiet {
            println!("{}", format_field("Segmentation", &path.display().to_string()));
        }
    }

    fn hide(&mut self) {
        log::debug!("Clearing displayed volume and segmentation");
    }
}
