//! Dataset directory management and setup utilities
//!
//! Provides functions for creating segmentation directories with specific file
//! layouts, plus an isolated config/cache home so CLI tests never touch the
//! user's real session.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use seg_navigator::core::error::Result;
use seg_navigator::FileKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test dataset setup result. The TempDirs must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestDataset {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub home: TempDir,
}

impl TestDataset {
    /// Get the dataset path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty file of `kind` at `index`
    pub fn add(&self, kind: FileKind, index: usize) -> Result<()> {
        fs::write(kind.path_in(&self.path, index), b"")?;
        Ok(())
    }

    /// Create complete image/segmentation pairs for `indices`
    pub fn add_pairs(&self, indices: impl IntoIterator<Item = usize>) -> Result<()> {
        for index in indices {
            self.add(FileKind::Image, index)?;
            self.add(FileKind::ImageSegmentation, index)?;
        }
        Ok(())
    }

    /// Create complete sub-image pairs for `indices`
    pub fn add_sub_pairs(&self, indices: impl IntoIterator<Item = usize>) -> Result<()> {
        for index in indices {
            self.add(FileKind::SubImage, index)?;
            self.add(FileKind::SubImageSegmentation, index)?;
        }
        Ok(())
    }

    pub fn remove(&self, kind: FileKind, index: usize) -> Result<()> {
        fs::remove_file(kind.path_in(&self.path, index))?;
        Ok(())
    }

    /// Binary command with config and cache redirected into `home`
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("seg-navigator").map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string())
        })?;
        cmd.env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env("XDG_CACHE_HOME", self.home.path().join("cache"))
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// Write a config file into the isolated config home
    pub fn write_config(&self, json: &str) -> Result<()> {
        let dir = self.home.path().join("config").join("seg-navigator");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("config.json"), json)?;
        Ok(())
    }

    pub fn session_file(&self) -> PathBuf {
        self.home
            .path()
            .join("cache")
            .join("seg-navigator")
            .join("session.json")
    }
}

/// Sets up an empty dataset directory
pub fn setup_test_dataset() -> Result<TestDataset> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    let home = TempDir::new()?;

    Ok(TestDataset {
        temp_dir,
        path,
        home,
    })
}

/// Sets up a dataset with `count` complete primary pairs
pub fn setup_test_dataset_with_pairs(count: usize) -> Result<TestDataset> {
    let dataset = setup_test_dataset()?;
    dataset.add_pairs(0..count)?;
    Ok(dataset)
}
