//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Catalog model (TestEntry, DuplicateGroup, Category)
//! - Run-level error type
//! - Path normalization utilities
//! - Hashing and file metadata helpers

pub mod error;
pub mod model;
pub mod paths;
pub mod util;
