//! Backup source and bundle file discovery
//!
//! The backup root holds one directory per source; each source holds bundle
//! files. Both levels are listed in name order so runs are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RestoreError, RestoreResult};

/// A directory of bundle files below the backup root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSource {
    pub name: String,
    pub path: PathBuf,
}

/// List the source directories directly below `root`
///
/// Plain files at the root are skipped.
pub fn list_sources(root: &Path) -> RestoreResult<Vec<BackupSource>> {
    let mut sources = Vec::new();

    for entry in read_dir_sorted(root)? {
        if entry.is_dir() {
            let name = file_name(&entry);
            sources.push(BackupSource { name, path: entry });
        } else {
            debug!(path = %entry.display(), "Skipping non-directory entry in backup root");
        }
    }

    Ok(sources)
}

/// List the bundle files in a source directory
///
/// Subdirectories and hidden files are skipped.
pub fn list_bundle_files(source: &Path) -> RestoreResult<Vec<PathBuf>> {
    Ok(read_dir_sorted(source)?
        .into_iter()
        .filter(|path| path.is_file() && !file_name(path).starts_with('.'))
        .collect())
}

fn read_dir_sorted(dir: &Path) -> RestoreResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| RestoreError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| RestoreError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;
        paths.push(entry.path());
    }

    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_sources_sorted_and_dirs_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("b")).unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        fs::write(temp_dir.path().join("README.txt"), "notes").unwrap();

        let sources = list_sources(temp_dir.path()).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(sources[0].path, temp_dir.path().join("a"));
    }

    #[test]
    fn test_list_bundle_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("2.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("1.json"), "{}").unwrap();
        fs::write(temp_dir.path().join(".DS_Store"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let files = list_bundle_files(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("1.json"), temp_dir.path().join("2.json")]
        );
    }

    #[test]
    fn test_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = list_sources(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RestoreError::Io(_)));
    }
}
