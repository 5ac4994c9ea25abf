//! Predefined dataset scenarios
//!
//! Provides functions for creating datasets with specific layouts to test
//! scanning and navigation consistently.

#![allow(dead_code)]

use super::dataset::*;
use seg_navigator::core::error::Result;

/// Scenario: three primary pairs with a sub-image pair only at index 1
pub fn create_compare_dataset() -> Result<TestDataset> {
    let dataset = setup_test_dataset_with_pairs(3)?;
    dataset.add_sub_pairs([1])?;
    Ok(dataset)
}

/// Scenario: open `dataset` through the CLI so later commands have a session
pub fn open_dataset(dataset: &TestDataset) -> Result<()> {
    use assert_cmd::prelude::*;

    dataset
        .command()?
        .arg("open")
        .arg(dataset.path())
        .assert()
        .success();
    Ok(())
}
