//! One category's records in the JSON store
//!
//! Records are kept as a JSON array in insertion order, so listing order is
//! insertion order. A table without a path lives in memory only.
//!
//! Single-record inserts are staged in memory and written by the next
//! `flush` or bulk insert, so a run of N inserts costs one file write.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{RestoreError, StoreError, StoreResult};
use crate::models::Entity;

use super::file_io::{read_json, write_json_atomic};

struct TableData<T> {
    records: Vec<T>,
    identities: HashSet<String>,
    /// Trailing records not yet written to disk
    pending: usize,
}

impl<T> Default for TableData<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            identities: HashSet::new(),
            pending: 0,
        }
    }
}

/// Repository for one category
pub struct Table<T: Entity> {
    path: Option<PathBuf>,
    data: RwLock<TableData<T>>,
}

impl<T: Entity> Table<T> {
    /// Create a table backed by `path`, or in memory if `None`
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            data: RwLock::new(TableData::default()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), RestoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let records: Vec<T> = read_json(path)?;

        let mut data = self.data.write().map_err(|e| {
            RestoreError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.identities = records.iter().map(T::identity).collect();
        data.records = records;
        data.pending = 0;

        Ok(())
    }

    /// Insert one record
    pub fn insert(&self, record: &T) -> StoreResult<()> {
        self.insert_with(record, |_| Ok(()))
    }

    /// Stage one record after it passes validation and `precondition`
    ///
    /// The record is visible immediately and written by the next `flush`.
    pub fn insert_with<F>(&self, record: &T, precondition: F) -> StoreResult<()>
    where
        F: FnOnce(&T) -> StoreResult<()>,
    {
        validate(record)?;
        precondition(record)?;

        let mut data = self.data.write().map_err(lock_error)?;

        let identity = record.identity();
        if data.identities.contains(&identity) {
            return Err(StoreError::already_exists(T::CATEGORY.entity_name(), identity));
        }

        data.identities.insert(identity);
        data.records.push(record.clone());
        data.pending += 1;
        Ok(())
    }

    /// Insert a batch of records, all or nothing, and write the table
    ///
    /// Every record is validated and checked against both the stored
    /// identities and the rest of the batch before anything is applied.
    /// Staged records are written along with the batch.
    pub fn insert_all(&self, records: &[T]) -> StoreResult<()> {
        for record in records {
            validate(record)?;
        }

        let mut data = self.data.write().map_err(lock_error)?;

        let mut batch = HashSet::with_capacity(records.len());
        for record in records {
            let identity = record.identity();
            if data.identities.contains(&identity) || !batch.insert(identity.clone()) {
                return Err(StoreError::already_exists(T::CATEGORY.entity_name(), identity));
            }
        }

        data.identities.extend(batch);
        data.records.extend(records.iter().cloned());
        data.pending += records.len();
        self.commit(&mut data)
    }

    /// Write staged records to disk
    ///
    /// On failure the staged records are dropped from the table.
    pub fn flush(&self) -> StoreResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        if data.pending == 0 {
            return Ok(());
        }
        self.commit(&mut data)
    }

    /// Check whether a record with this identity is stored
    pub fn contains(&self, identity: &str) -> StoreResult<bool> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.identities.contains(identity))
    }

    /// All records in insertion order
    pub fn list(&self) -> StoreResult<Vec<T>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.records.clone())
    }

    /// Count records
    pub fn count(&self) -> StoreResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.records.len())
    }

    /// Write every record, rolling back the pending ones if the write fails
    fn commit(&self, data: &mut TableData<T>) -> StoreResult<()> {
        let Some(path) = &self.path else {
            data.pending = 0;
            return Ok(());
        };

        if let Err(err) = write_json_atomic(path, &data.records) {
            let keep = data.records.len() - data.pending;
            let dropped: Vec<T> = data.records.drain(keep..).collect();
            for record in &dropped {
                data.identities.remove(&record.identity());
            }
            data.pending = 0;
            return Err(StoreError::Storage(err.to_string()));
        }

        data.pending = 0;
        Ok(())
    }
}

fn validate<T: Entity>(record: &T) -> StoreResult<()> {
    record.validate().map_err(|e| {
        StoreError::InvalidParameters(format!(
            "{} {}: {}",
            T::CATEGORY.entity_name(),
            record.identity(),
            e
        ))
    })
}

fn lock_error<E: std::fmt::Display>(err: E) -> StoreError {
    StoreError::Storage(format!("Failed to acquire lock: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use tempfile::TempDir;

    fn create_test_table() -> (TempDir, Table<Course>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("courses.json");
        let table = Table::new(Some(path));
        (temp_dir, table)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, table) = create_test_table();
        table.load().unwrap();
        assert_eq!(table.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_reload() {
        let (temp_dir, table) = create_test_table();
        table.load().unwrap();
        table.insert(&Course::new("CS101", "Programming")).unwrap();
        table.flush().unwrap();

        let reloaded: Table<Course> = Table::new(Some(temp_dir.path().join("courses.json")));
        reloaded.load().unwrap();
        assert!(reloaded.contains("CS101").unwrap());
        assert_eq!(reloaded.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let table: Table<Course> = Table::new(None);
        table.insert(&Course::new("CS101", "Programming")).unwrap();

        let err = table.insert(&Course::new("CS101", "Again")).unwrap_err();
        assert_eq!(err, StoreError::already_exists("Course", "CS101"));
        assert_eq!(table.count().unwrap(), 1);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let table: Table<Course> = Table::new(None);
        let err = table.insert(&Course::new("CS101", "")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidParameters(_)));
        assert_eq!(table.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_all_is_all_or_nothing() {
        let table: Table<Course> = Table::new(None);
        table.insert(&Course::new("CS102", "Existing")).unwrap();

        let batch = vec![
            Course::new("CS101", "New"),
            Course::new("CS102", "Duplicate"),
        ];
        let err = table.insert_all(&batch).unwrap_err();
        assert_eq!(err.kind(), crate::error::FailureKind::AlreadyExists);
        assert!(!table.contains("CS101").unwrap());
        assert_eq!(table.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_all_rejects_duplicates_within_batch() {
        let table: Table<Course> = Table::new(None);
        let batch = vec![Course::new("CS101", "One"), Course::new("CS101", "Two")];

        assert!(table.insert_all(&batch).is_err());
        assert_eq!(table.count().unwrap(), 0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let table: Table<Course> = Table::new(None);
        table
            .insert_all(&[Course::new("B", "b"), Course::new("A", "a")])
            .unwrap();
        table.insert(&Course::new("C", "c")).unwrap();

        let ids: Vec<_> = table.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_failed_precondition_leaves_table_untouched() {
        let table: Table<Course> = Table::new(None);
        let err = table
            .insert_with(&Course::new("CS101", "Programming"), |_| {
                Err(StoreError::does_not_exist("Course", "parent"))
            })
            .unwrap_err();

        assert_eq!(err.kind(), crate::error::FailureKind::DoesNotExist);
        assert_eq!(table.count().unwrap(), 0);
    }

    #[test]
    fn test_inserts_are_written_on_flush() {
        let (temp_dir, table) = create_test_table();
        let path = temp_dir.path().join("courses.json");
        table.insert(&Course::new("CS101", "Programming")).unwrap();
        table.insert(&Course::new("CS102", "Data Structures")).unwrap();

        assert!(!path.exists());
        assert!(table.contains("CS102").unwrap());

        table.flush().unwrap();
        let reloaded: Table<Course> = Table::new(Some(path));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
    }

    #[test]
    fn test_insert_all_writes_staged_records() {
        let (temp_dir, table) = create_test_table();
        table.insert(&Course::new("CS101", "Programming")).unwrap();
        table.insert_all(&[Course::new("CS102", "Data Structures")]).unwrap();

        let reloaded: Table<Course> = Table::new(Some(temp_dir.path().join("courses.json")));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
    }

    #[test]
    fn test_failed_flush_drops_staged_records() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("blocker"), "").unwrap();
        let table: Table<Course> =
            Table::new(Some(temp_dir.path().join("blocker").join("courses.json")));

        table.insert(&Course::new("CS101", "Programming")).unwrap();
        let err = table.flush().unwrap_err();

        assert!(matches!(err, StoreError::Storage(_)));
        assert_eq!(table.count().unwrap(), 0);
        assert!(!table.contains("CS101").unwrap());
        // Nothing left to write
        table.flush().unwrap();
    }
}
