//! Restore of backed-up data bundles
//!
//! # Layout
//!
//! ```text
//! Backup/                 backup root
//!   <source>/             one directory per backup source
//!     <any name>          one serialized data bundle per file
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bundle_restore::restore::{JsonBundleLoader, RestoreOrchestrator};
//! use bundle_restore::storage::JsonStore;
//!
//! let store = JsonStore::open("store")?;
//! let report = RestoreOrchestrator::new(&store, &JsonBundleLoader).run(Path::new("Backup"));
//! println!("{}", report.summary());
//! ```

pub mod discovery;
pub mod loader;
pub mod orchestrator;

use std::path::{Path, PathBuf};

use crate::models::BundleSummary;

pub use discovery::{list_bundle_files, list_sources, BackupSource};
pub use loader::{BundleLoader, JsonBundleLoader};
pub use orchestrator::RestoreOrchestrator;

/// Result of checking one bundle file without restoring it
#[derive(Debug, Clone)]
pub struct BundleCheck {
    pub source: String,
    pub path: PathBuf,
    pub result: Result<BundleSummary, String>,
}

impl BundleCheck {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Load every bundle below `root` and summarize it, touching no store
///
/// Unreadable sources show up as a failed check on the source directory.
pub fn validate_bundles<L: BundleLoader + ?Sized>(root: &Path, loader: &L) -> Vec<BundleCheck> {
    let mut checks = Vec::new();

    if !root.is_dir() {
        return checks;
    }

    let sources = match list_sources(root) {
        Ok(sources) => sources,
        Err(err) => {
            checks.push(BundleCheck {
                source: root.display().to_string(),
                path: root.to_path_buf(),
                result: Err(err.to_string()),
            });
            return checks;
        }
    };

    for source in sources {
        match list_bundle_files(&source.path) {
            Ok(files) => {
                for path in files {
                    let result = loader
                        .load(&path)
                        .map(|bundle| bundle.summary())
                        .map_err(|e| e.to_string());
                    checks.push(BundleCheck {
                        source: source.name.clone(),
                        path,
                        result,
                    });
                }
            }
            Err(err) => checks.push(BundleCheck {
                source: source.name.clone(),
                path: source.path.clone(),
                result: Err(err.to_string()),
            }),
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_bundles() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("2014");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("good.json"),
            r#"{"courses": {"c1": {"id": "CS101", "name": "Programming"}}}"#,
        )
        .unwrap();
        fs::write(source.join("bad.json"), "[]").unwrap();

        let checks = validate_bundles(temp_dir.path(), &JsonBundleLoader);

        assert_eq!(checks.len(), 2);
        // Sorted by name: bad.json first
        assert!(!checks[0].is_valid());
        assert!(checks[1].is_valid());
        assert_eq!(
            checks[1].result.as_ref().unwrap().describe(),
            "1 courses"
        );
    }

    #[test]
    fn test_validate_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let checks = validate_bundles(&temp_dir.path().join("missing"), &JsonBundleLoader);
        assert!(checks.is_empty());
    }
}
