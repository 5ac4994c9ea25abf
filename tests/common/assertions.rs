//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating seg-navigator command output and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the invalid directory error
pub fn invalid_directory() -> impl Predicate<str> {
    predicates::str::contains("Not a valid segmentation directory")
}

/// Creates a predicate that checks for an unavailable index error
pub fn index_not_available(index: usize, view: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Index {index} is not available in {view} view"))
}

/// Creates a predicate that checks for the missing session error
pub fn no_session() -> impl Predicate<str> {
    predicates::str::contains("No directory is open")
}

/// Creates a predicate that checks the reported position
pub fn at_position(index: usize, view: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("index {index}"))
        .and(predicates::str::contains(format!("{view} view")))
}
