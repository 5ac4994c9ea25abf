use crate::core::{
    config::NavigatorConfig,
    directory::SegmentationDirectory,
    error::Result,
    output::{format_field, print_section_header, print_success},
};
use std::path::Path;

/// Validate a directory and summarise what the scanner found
pub fn execute_scan(dir: &Path) -> Result<()> {
    let config = NavigatorConfig::load_or_create()?;
    let directory = SegmentationDirectory::open(dir)?;

    print_scan_summary(&directory, &config);
    print_success(&format!(
        "{} is a valid segmentation directory.",
        directory.root().display()
    ));
    println!();
    Ok(())
}

fn print_scan_summary(directory: &SegmentationDirectory, config: &NavigatorConfig) {
    print_section_header("Segmentation Directory");
    println!(
        "{}",
        format_field("Directory", &directory.root().display().to_string())
    );
    println!(
        "{}",
        format_field(
            "Images",
            &format!(
                "{} (indices 0-{})",
                directory.len(),
                directory.len().saturating_sub(1)
            )
        )
    );

    let sub_indices = directory.sub_images().indices();
    let sub_text = if sub_indices.is_empty() {
        "none".to_string()
    } else {
        format!("{} (indices {})", sub_indices.len(), join_indices(&sub_indices))
    };
    println!("{}", format_field("Sub-images", &sub_text));

    if config.report_sub_gaps && !sub_indices.is_empty() {
        let missing = directory.scan_result().missing_sub_indices();
        if !missing.is_empty() {
            println!("{}", format_field("No sub-image", &join_indices(&missing)));
        }
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_indices() {
        assert_eq!(join_indices(&[]), "");
        assert_eq!(join_indices(&[0]), "0");
        assert_eq!(join_indices(&[1, 3, 4]), "1, 3, 4");
    }
}
