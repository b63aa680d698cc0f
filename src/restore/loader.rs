//! Bundle loading
//!
//! Turns one bundle file into a `DataBundle`. Any read or parse problem is a
//! `RestoreError::Load` for that file.

use std::fs;
use std::path::Path;

use crate::error::{RestoreError, RestoreResult};
use crate::models::DataBundle;

/// Loads a data bundle from a file
pub trait BundleLoader {
    fn load(&self, path: &Path) -> RestoreResult<DataBundle>;
}

/// Loads bundles stored as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBundleLoader;

impl BundleLoader for JsonBundleLoader {
    fn load(&self, path: &Path) -> RestoreResult<DataBundle> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RestoreError::load(path.display(), format!("failed to read file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            RestoreError::load(path.display(), format!("failed to parse bundle: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bundle.json");
        fs::write(
            &path,
            r#"{"courses": {"c1": {"id": "CS101", "name": "Programming"}}}"#,
        )
        .unwrap();

        let bundle = JsonBundleLoader.load(&path).unwrap();
        assert_eq!(bundle.len(Category::Course), 1);
    }

    #[test]
    fn test_load_corrupt_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bundle.json");
        fs::write(&path, "{\"courses\": {\"c1\": ").unwrap();

        let err = JsonBundleLoader.load(&path).unwrap_err();
        assert!(matches!(err, RestoreError::Load { .. }));
        assert!(err.to_string().contains("failed to parse bundle"));
    }

    #[test]
    fn test_load_schema_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bundle.json");
        fs::write(&path, r#"{"courses": {"c1": {"id": 42}}}"#).unwrap();

        assert!(matches!(
            JsonBundleLoader.load(&path).unwrap_err(),
            RestoreError::Load { .. }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonBundleLoader
            .load(&temp_dir.path().join("missing.json"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}
