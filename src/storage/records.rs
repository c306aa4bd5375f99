//! Record sources
//!
//! The export pipeline only ever reads records, one at a time, by id.
//! [`FileRecordStore`] serves `<records_dir>/<id>.json` (or `.yaml`/`.yml`);
//! [`MemoryRecordStore`] is the in-process variant used by embedders and
//! tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ReportError, ReportResult};
use crate::models::{RecordId, SourceRecord};

use super::file_io::{read_document, write_json_atomic, FileEncoding, RECORD_EXTENSIONS};

/// Anything that can look up a travel plan by id
pub trait RecordSource: Send + Sync {
    /// Fetch a record; a miss is `ReportError::NotFound`
    fn fetch(&self, id: &RecordId) -> ReportResult<SourceRecord>;
}

/// Ids become file names, so anything that could leave the directory is refused
fn check_id(id: &RecordId) -> ReportResult<()> {
    let raw = id.as_str();
    if raw.is_empty()
        || raw.starts_with('.')
        || raw.contains(|c: char| c == '/' || c == '\\' || c.is_control())
    {
        return Err(ReportError::Validation(format!(
            "Invalid record id '{}'",
            raw.escape_debug()
        )));
    }
    Ok(())
}

/// Records stored as one file per record
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Create a store over a records directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a record is saved to
    pub fn record_path(&self, id: &RecordId) -> PathBuf {
        self.dir.join(format!("{}.json", id.as_str()))
    }

    fn locate(&self, id: &RecordId) -> Option<PathBuf> {
        RECORD_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", id.as_str(), ext)))
            .find(|path| path.is_file())
    }

    /// Write a record as JSON
    pub fn save(&self, record: &SourceRecord) -> ReportResult<()> {
        check_id(&record.id)?;
        write_json_atomic(&self.record_path(&record.id), record)
    }

    /// Ids of all stored records, sorted
    pub fn list(&self) -> ReportResult<Vec<RecordId>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            ReportError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut ids: Vec<RecordId> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| FileEncoding::of(path).is_some())
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .filter(|stem| !stem.starts_with('.'))
                    .map(RecordId::from)
            })
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        Ok(ids)
    }
}

impl RecordSource for FileRecordStore {
    fn fetch(&self, id: &RecordId) -> ReportResult<SourceRecord> {
        check_id(id)?;

        let path = self
            .locate(id)
            .ok_or_else(|| ReportError::record_not_found(id.as_str()))?;
        log::debug!("Loading record '{}' from {}", id, path.display());

        let mut record: SourceRecord = read_document(&path)?;

        if record.id.is_empty() {
            record.id = id.clone();
        }
        Ok(record)
    }
}

/// Records held in memory
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<RecordId, SourceRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a record
    pub fn upsert(&self, record: SourceRecord) -> ReportResult<()> {
        let mut records = self.records.write().map_err(|e| {
            ReportError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for MemoryRecordStore {
    fn fetch(&self, id: &RecordId) -> ReportResult<SourceRecord> {
        let records = self.records.read().map_err(|e| {
            ReportError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        records
            .get(id)
            .cloned()
            .ok_or_else(|| ReportError::record_not_found(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(temp_dir.path().join("records"));

        let mut record = SourceRecord::new("lisbon", "Lisbon");
        record.travelers = Some(2);
        store.save(&record).unwrap();

        let loaded = store.fetch(&RecordId::from("lisbon")).unwrap();
        assert_eq!(loaded.name, "Lisbon");
        assert_eq!(loaded.travelers, Some(2));
    }

    #[test]
    fn test_yaml_record_takes_id_from_file_name() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("rome.yaml"), "name: Rome\n").unwrap();
        let store = FileRecordStore::new(temp_dir.path());

        let loaded = store.fetch(&RecordId::from("rome")).unwrap();
        assert_eq!(loaded.id.as_str(), "rome");
        assert_eq!(loaded.display_name(), "Rome");
    }

    #[test]
    fn test_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(temp_dir.path());

        let err = store.fetch(&RecordId::from("nowhere")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_path_escape_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(temp_dir.path());

        for id in ["../secret", "a/b", "..", "a\\b"] {
            let err = store.fetch(&RecordId::from(id)).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", id);
        }
    }

    #[test]
    fn test_malformed_record_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("bad.json"), "{ nope").unwrap();
        let store = FileRecordStore::new(temp_dir.path());

        let err = store.fetch(&RecordId::from("bad")).unwrap_err();
        assert!(matches!(err, ReportError::Storage(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(temp_dir.path());
        store.save(&SourceRecord::new("b", "B")).unwrap();
        std::fs::write(temp_dir.path().join("a.yml"), "name: A\n").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let ids = store.list().unwrap();
        assert_eq!(ids, vec![RecordId::from("a"), RecordId::from("b")]);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryRecordStore::new();
        assert!(store.is_empty());
        store.upsert(SourceRecord::new("t1", "Trip")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.fetch(&RecordId::from("t1")).unwrap().name, "Trip");
        assert!(store.fetch(&RecordId::from("t2")).unwrap_err().is_not_found());
    }
}
