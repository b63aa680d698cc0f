//! Path management for bundle-restore
//!
//! All locations hang off a single base directory.
//!
//! ## Base Directory Resolution Order
//!
//! 1. `BUNDLE_RESTORE_HOME` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::RestoreError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "BUNDLE_RESTORE_HOME";

/// Default name of the backup root below the base directory
pub const DEFAULT_BACKUP_FOLDER: &str = "Backup";

/// Default name of the store directory below the base directory
pub const DEFAULT_STORE_FOLDER: &str = "store";

/// Manages all paths used by bundle-restore
#[derive(Debug, Clone)]
pub struct RestorePaths {
    /// Base directory everything else is resolved against
    base_dir: PathBuf,
}

impl RestorePaths {
    /// Create a new RestorePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the env var is unset and the current directory
    /// cannot be determined.
    pub fn new() -> Result<Self, RestoreError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                RestoreError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create RestorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Resolve a folder name (or absolute path) against the base directory
    pub fn resolve(&self, folder: &str) -> PathBuf {
        self.base_dir.join(folder)
    }

    /// Get the default backup root (`<base>/Backup`)
    pub fn backup_dir(&self) -> PathBuf {
        self.resolve(DEFAULT_BACKUP_FOLDER)
    }

    /// Get the default store directory (`<base>/store`)
    pub fn store_dir(&self) -> PathBuf {
        self.resolve(DEFAULT_STORE_FOLDER)
    }

    /// Get the directory run reports are written to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("restore.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestorePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.backup_dir(), temp_dir.path().join("Backup"));
        assert_eq!(paths.store_dir(), temp_dir.path().join("store"));
        assert_eq!(paths.reports_dir(), temp_dir.path().join("reports"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("restore.json"));
    }

    #[test]
    fn test_resolve_absolute_folder() {
        let temp_dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let paths = RestorePaths::with_base_dir(temp_dir.path().to_path_buf());

        // Joining an absolute path replaces the base
        let absolute = other.path().to_str().unwrap();
        assert_eq!(paths.resolve(absolute), other.path());
    }
}
