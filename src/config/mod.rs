//! Configuration module for bundle-restore
//!
//! This module provides:
//! - Base directory and fixed location resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::RestorePaths;
pub use settings::Settings;
