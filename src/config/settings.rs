//! User settings for bundle-restore
//!
//! Stored as `restore.json` in the base directory. Every field has a default,
//! so a missing or partial file is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::{RestorePaths, DEFAULT_BACKUP_FOLDER, DEFAULT_STORE_FOLDER};
use crate::error::RestoreError;

/// Settings for a restore run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backup root, relative to the base directory unless absolute
    #[serde(default = "default_backup_folder")]
    pub backup_folder: String,

    /// Store directory, relative to the base directory unless absolute
    #[serde(default = "default_store_folder")]
    pub store_folder: String,

    /// Default log filter directive (e.g. "info", "bundle_restore=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether a JSON run report is written after each restore
    #[serde(default = "default_write_report")]
    pub write_report: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_backup_folder() -> String {
    DEFAULT_BACKUP_FOLDER.to_string()
}

fn default_store_folder() -> String {
    DEFAULT_STORE_FOLDER.to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_write_report() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backup_folder: default_backup_folder(),
            store_folder: default_store_folder(),
            log_filter: default_log_filter(),
            write_report: default_write_report(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RestorePaths) -> Result<Self, RestoreError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RestoreError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RestoreError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RestorePaths) -> Result<(), RestoreError> {
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| RestoreError::Io(format!("Failed to create base directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RestoreError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RestoreError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Backup root resolved against the base directory
    pub fn backup_dir(&self, paths: &RestorePaths) -> PathBuf {
        paths.resolve(&self.backup_folder)
    }

    /// Store directory resolved against the base directory
    pub fn store_dir(&self, paths: &RestorePaths) -> PathBuf {
        paths.resolve(&self.store_folder)
    }
}
