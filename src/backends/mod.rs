//! Backends module - Filesystem operations
//!
//! Provides:
//! - scan: HTML test discovery with walkdir

pub mod scan;
