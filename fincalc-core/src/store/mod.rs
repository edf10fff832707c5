//! The shared profile/flow store and its storage-backend seam.
//!
//! The backend trait is shaped like browser local storage: synchronous
//! string values under string keys. Core ships an in-memory backend;
//! the `fincalc-storage` crate provides the JSON-file implementation.

mod profile_store;

use std::collections::HashMap;

use thiserror::Error;

pub use profile_store::{FLOW_PROGRESS_KEY, PROFILE_KEY, ProfileStore};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// Synchronous key-value persistence, localStorage-shaped.
pub trait StorageBackend {
    /// The stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Ephemeral backend for tests and sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_backend_round_trips_values() {
        let mut backend = MemoryBackend::new();

        assert_eq!(backend.get("k").unwrap(), None);
        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v".to_string()));
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn removing_an_absent_key_is_fine() {
        let mut backend = MemoryBackend::new();

        assert!(backend.remove("missing").is_ok());
    }
}
