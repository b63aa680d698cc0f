//! Structured run report
//!
//! Every caught failure ends up here as data, so callers and tests can
//! inspect what happened without scraping log output. The report never
//! changes how the run ends: a restore with failures still completes.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FailureKind, RestoreResult, StoreError};
use crate::models::{Category, Isolation};
use crate::storage::write_json_atomic;

/// One rejected create call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistFailure {
    pub category: Category,
    pub kind: FailureKind,
    /// Record key and identity for record isolation, the category for bulk calls
    pub context: String,
    pub message: String,
}

impl PersistFailure {
    pub fn new(category: Category, context: impl Into<String>, err: &StoreError) -> Self {
        Self {
            category,
            kind: err.kind(),
            context: context.into(),
            message: err.to_string(),
        }
    }
}

/// Result of persisting one category of one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub isolation: Isolation,
    /// Records handed to the persister
    pub attempted: usize,
    /// Records the store accepted
    pub created: usize,
    pub failures: Vec<PersistFailure>,
}

impl CategoryOutcome {
    pub fn new(category: Category, attempted: usize) -> Self {
        Self {
            category,
            isolation: category.isolation(),
            attempted,
            created: 0,
            failures: Vec::new(),
        }
    }

    /// Whether every record was created
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.created == self.attempted
    }
}

/// What happened to one bundle file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Loaded; the non-empty categories were persisted in restore order
    Restored { categories: Vec<CategoryOutcome> },
    /// Could not be read or parsed; nothing was persisted
    LoadFailed { message: String },
}

/// Report entry for one bundle file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Name of the backup source the file came from
    pub source: String,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Category outcomes, empty if the file failed to load
    pub fn categories(&self) -> &[CategoryOutcome] {
        match &self.outcome {
            FileOutcome::Restored { categories } => categories,
            FileOutcome::LoadFailed { .. } => &[],
        }
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(self.outcome, FileOutcome::LoadFailed { .. })
    }
}

/// A backup source whose file list could not be read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source: String,
    pub message: String,
}

/// Report of one restore run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub backup_root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub files: Vec<FileReport>,
    pub source_failures: Vec<SourceFailure>,
}

impl RunReport {
    /// Start a report for a run over `backup_root`
    pub fn new(backup_root: impl Into<PathBuf>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            backup_root: backup_root.into(),
            started_at: Utc::now(),
            finished_at: None,
            files: Vec::new(),
            source_failures: Vec::new(),
        }
    }

    /// Mark the run finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of files that loaded and were persisted
    pub fn files_restored(&self) -> usize {
        self.files.iter().filter(|f| !f.is_load_failure()).count()
    }

    /// Number of files that failed to load
    pub fn load_failures(&self) -> usize {
        self.files.iter().filter(|f| f.is_load_failure()).count()
    }

    /// All persistence failures across all files
    pub fn persist_failures(&self) -> impl Iterator<Item = &PersistFailure> {
        self.files
            .iter()
            .flat_map(|f| f.categories())
            .flat_map(|c| c.failures.iter())
    }

    /// Total records the store accepted
    pub fn records_created(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| f.categories())
            .map(|c| c.created)
            .sum()
    }

    /// Every caught failure: source, load and persistence
    pub fn failure_count(&self) -> usize {
        self.source_failures.len() + self.load_failures() + self.persist_failures().count()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} file(s) restored, {} failed to load, {} record(s) created, {} persistence failure(s)",
            self.files_restored(),
            self.load_failures() + self.source_failures.len(),
            self.records_created(),
            self.persist_failures().count()
        )
    }

    /// Default report file name, e.g. `restore-20140301-101500.json`
    pub fn file_name(&self) -> String {
        format!("restore-{}.json", self.started_at.format("%Y%m%d-%H%M%S"))
    }

    /// Write the report as pretty JSON, atomically
    pub fn write_json(&self, path: &Path) -> RestoreResult<()> {
        write_json_atomic(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_report() -> RunReport {
        let mut courses = CategoryOutcome::new(Category::Course, 2);
        courses.created = 2;

        let mut accounts = CategoryOutcome::new(Category::Account, 3);
        accounts.created = 2;
        accounts.failures.push(PersistFailure::new(
            Category::Account,
            "alice (alice.g)",
            &StoreError::already_exists("Account", "alice.g"),
        ));

        let mut report = RunReport::new("Backup");
        report.files.push(FileReport {
            source: "2014".into(),
            path: PathBuf::from("Backup/2014/a.json"),
            outcome: FileOutcome::Restored {
                categories: vec![accounts, courses],
            },
        });
        report.files.push(FileReport {
            source: "2014".into(),
            path: PathBuf::from("Backup/2014/b.json"),
            outcome: FileOutcome::LoadFailed {
                message: "expected value".into(),
            },
        });
        report
    }

    #[test]
    fn test_counts() {
        let report = sample_report();
        assert_eq!(report.files_restored(), 1);
        assert_eq!(report.load_failures(), 1);
        assert_eq!(report.records_created(), 4);
        assert_eq!(report.persist_failures().count(), 1);
        assert_eq!(report.failure_count(), 2);
    }

    #[test]
    fn test_summary() {
        let report = sample_report();
        assert_eq!(
            report.summary(),
            "1 file(s) restored, 1 failed to load, 4 record(s) created, 1 persistence failure(s)"
        );
    }

    #[test]
    fn test_category_outcome_complete() {
        let mut outcome = CategoryOutcome::new(Category::Student, 1);
        assert!(!outcome.is_complete());
        outcome.created = 1;
        assert!(outcome.is_complete());
        assert_eq!(outcome.isolation, Isolation::Category);
    }

    #[test]
    fn test_write_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut report = sample_report();
        report.finish();

        let path = temp_dir.path().join("reports").join(report.file_name());
        report.write_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["files"][0]["outcome"]["status"], "restored");
        assert_eq!(value["files"][1]["outcome"]["status"], "load_failed");
        assert_eq!(
            value["files"][0]["outcome"]["categories"][0]["failures"][0]["kind"],
            "already_exists"
        );
    }
}
