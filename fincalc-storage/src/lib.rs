//! File-backed implementation of the core storage trait.
//!
//! Each key becomes one JSON document in a single directory, mirroring the
//! two-key browser local-storage layout the profile store expects. Writes
//! go through a temp file and rename, so a crash mid-write leaves the
//! previous document intact rather than a truncated one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use fincalc_core::store::{StorageBackend, StorageError};

/// Stores each key as `<dir>/<key>.json`.
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Opens (and creates, if needed) the storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        let mut file =
            fs::File::create(&tmp).map_err(|e| StorageError::Write(e.to_string()))?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| StorageError::Write(e.to_string()))?;
        drop(file);

        fs::rename(&tmp, &path).map_err(|e| StorageError::Write(e.to_string()))?;
        debug!(key, bytes = value.len(), "document written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use fincalc_core::models::FlowStep;
    use fincalc_core::store::ProfileStore;

    use super::*;

    #[test]
    fn round_trips_values_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::new(dir.path()).unwrap();

        assert_eq!(backend.get("k").unwrap(), None);
        backend.set("k", r#"{"a":1}"#).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(r#"{"a":1}"#.to_string()));
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn removing_an_absent_key_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::new(dir.path()).unwrap();

        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn overwrites_replace_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = JsonFileBackend::new(dir.path()).unwrap();

        backend.set("k", "first, much longer value").unwrap();
        backend.set("k", "second").unwrap();

        assert_eq!(backend.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn profile_store_persists_across_reopens() {
        let dir = tempfile::tempdir().unwrap();

        {
            let backend = JsonFileBackend::new(dir.path()).unwrap();
            let mut store = ProfileStore::new(backend);
            store.apply_income_result(dec!(25), dec!(50000)).unwrap();
            store.mark_step_complete(FlowStep::TakeHomePay).unwrap();
        }

        let backend = JsonFileBackend::new(dir.path()).unwrap();
        let store = ProfileStore::new(backend);

        assert_eq!(store.profile().annual_salary, Some(dec!(50000)));
        assert!(store.flow().is_step_complete(FlowStep::TakeHomePay));
        assert_eq!(store.next_step(), Some(FlowStep::Budget));
    }

    #[test]
    fn corrupt_document_on_disk_degrades_to_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut backend = JsonFileBackend::new(dir.path()).unwrap();
            backend
                .set("sharedCalculatorData", "definitely not json")
                .unwrap();
        }

        let backend = JsonFileBackend::new(dir.path()).unwrap();
        let store = ProfileStore::new(backend);

        assert!(store.profile().is_unset());
    }

    #[test]
    fn reset_removes_the_profile_document() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path()).unwrap();
        let mut store = ProfileStore::new(backend);

        store.apply_income_result(dec!(25), dec!(50000)).unwrap();
        store.reset().unwrap();

        assert!(!dir.path().join("sharedCalculatorData.json").exists());
        // Flow progress is re-persisted as the empty document.
        assert!(dir.path().join("calculatorFlowProgress.json").exists());
    }
}
