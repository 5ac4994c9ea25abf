//! Consolidated test utilities for seg-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! built around real dataset directories in temporary locations.

pub mod assertions;
pub mod dataset;
pub mod fixtures;
